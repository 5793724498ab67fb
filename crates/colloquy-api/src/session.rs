use colloquy_engine::models::{AuthTokens, User};

use crate::client::ApiClient;
use crate::error::ApiError;

/// An authenticated session: the token pair plus the profile it belongs to.
///
/// Sessions are explicit values passed to whoever needs authenticated API
/// access, never ambient state. The lifecycle is fixed: created on login or
/// signup, resumed on startup from persisted tokens (revalidated against
/// the server), and torn down by dropping the value and clearing whatever
/// store persisted the tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    tokens: AuthTokens,
    user: User,
}

impl Session {
    /// Log in with credentials, then confirm the issued token by fetching
    /// the profile it belongs to.
    pub async fn login(
        client: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<Self, ApiError> {
        let tokens = client.login(email, password).await?;
        let user = client.user_info(&tokens).await?;
        log::info!("signed in as {}", user.email);
        Ok(Self { tokens, user })
    }

    /// Register a new account, then log straight in with the same
    /// credentials.
    pub async fn sign_up(
        client: &ApiClient,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Self, ApiError> {
        client
            .sign_up(email, password, first_name, last_name)
            .await?;
        Self::login(client, email, password).await
    }

    /// Revalidate a persisted token pair. An error means the tokens are no
    /// longer good and the caller should clear its stored copy.
    pub async fn resume(client: &ApiClient, tokens: AuthTokens) -> Result<Self, ApiError> {
        let user = client.user_info(&tokens).await?;
        log::info!("resumed session for {}", user.email);
        Ok(Self { tokens, user })
    }

    pub fn tokens(&self) -> &AuthTokens {
        &self.tokens
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Replace the cached profile after an update round-trip.
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }
}
