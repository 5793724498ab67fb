pub mod models;
pub mod render;

// Re-export key types for easier usage
pub use models::{AuthTokens, Chat, ChatSummary, Message, Sender, User};
pub use render::{Block, Span, parse_message};
