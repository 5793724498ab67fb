pub mod auth_form;
pub mod chat_history;
pub mod chat_screen;
pub mod home_screen;
pub mod login_screen;
pub mod message_content;
pub mod new_chat;
pub mod signup_screen;
pub mod spinner;
pub mod user_profile;

pub use auth_form::{AuthForm, AuthSubmit};
pub use chat_history::ChatHistoryScreen;
pub use chat_screen::ChatScreen;
pub use home_screen::HomeScreen;
pub use login_screen::LoginScreen;
pub use message_content::MessageContent;
pub use new_chat::NewChatScreen;
pub use signup_screen::SignupScreen;
pub use spinner::Spinner;
pub use user_profile::UserProfileScreen;
