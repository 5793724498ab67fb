//! HTTP client for the colloquy chat API.
//!
//! All authenticated state travels through an explicit [`Session`] value —
//! there is no ambient token. [`ApiClient`] is a thin, cloneable wrapper
//! over a shared `reqwest::Client` with one async method per endpoint.

pub mod client;
pub mod error;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::Session;
