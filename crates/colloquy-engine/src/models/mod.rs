pub mod chat;
pub mod user;

pub use chat::{Chat, ChatSummary, Message, Sender};
pub use user::{AuthTokens, User};
