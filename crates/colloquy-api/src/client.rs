use colloquy_engine::models::{AuthTokens, Chat, ChatSummary, Message, User};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;

/// Error body shape shared by every endpoint: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the remote chat API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool across clones. Authenticated endpoints take the token pair
/// explicitly rather than holding it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Exchange credentials for a token pair.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
        log::debug!("POST /login/ for {email}");
        let response = self
            .http
            .post(self.url("/login/"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        decode(response).await
    }

    /// Register a new account. The response body carries nothing the client
    /// needs; callers follow up with a login.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ApiError> {
        log::debug!("POST /sign-up/ for {email}");
        let response = self
            .http
            .post(self.url("/sign-up/"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "first_name": first_name,
                "last_name": last_name,
            }))
            .send()
            .await?;
        check_status(response).await
    }

    /// Fetch the profile the access token belongs to.
    pub async fn user_info(&self, tokens: &AuthTokens) -> Result<User, ApiError> {
        let response = self
            .authed(Method::GET, "/user-info", tokens)
            .send()
            .await?;
        decode(response).await
    }

    /// Update the signed-in user's names; returns the stored profile.
    pub async fn update_user_info(
        &self,
        tokens: &AuthTokens,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, ApiError> {
        let response = self
            .authed(Method::PATCH, "/user-info", tokens)
            .json(&serde_json::json!({
                "first_name": first_name,
                "last_name": last_name,
            }))
            .send()
            .await?;
        decode(response).await
    }

    /// List the user's chats, newest first as the server orders them.
    pub async fn chat_history(&self, tokens: &AuthTokens) -> Result<Vec<ChatSummary>, ApiError> {
        let response = self
            .authed(Method::GET, "/chat-history/", tokens)
            .send()
            .await?;
        decode(response).await
    }

    /// Create an empty chat with the given title.
    pub async fn create_chat(
        &self,
        tokens: &AuthTokens,
        title: &str,
    ) -> Result<ChatSummary, ApiError> {
        log::debug!("POST /chat/new/");
        let response = self
            .authed(Method::POST, "/chat/new/", tokens)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch one chat with its full message log.
    pub async fn chat(&self, tokens: &AuthTokens, id: Uuid) -> Result<Chat, ApiError> {
        let response = self
            .authed(Method::GET, "/chat/", tokens)
            .query(&[("id", id.to_string())])
            .send()
            .await?;
        decode(response).await
    }

    /// Send a message into a chat. The response is the server's
    /// authoritative copy of the message, which replaces the caller's
    /// provisional one.
    pub async fn send_message(
        &self,
        tokens: &AuthTokens,
        chat_id: Uuid,
        content: &str,
    ) -> Result<Message, ApiError> {
        log::debug!("POST /chat/?id={chat_id}");
        let response = self
            .authed(Method::POST, "/chat/", tokens)
            .query(&[("id", chat_id.to_string())])
            .json(&serde_json::json!({ "content": content }))
            .send()
            .await?;
        decode(response).await
    }

    fn authed(&self, method: Method, path: &str, tokens: &AuthTokens) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&tokens.access)
    }
}

/// Decodes a success body, or maps an error response to [`ApiError::Api`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(ApiError::InvalidResponse)
    } else {
        Err(error_from(status, response).await)
    }
}

/// Like [`decode`], for endpoints whose success body is discarded.
async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: reqwest::StatusCode, response: reqwest::Response) -> ApiError {
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    log::warn!("API error {status}: {detail}");
    ApiError::Api {
        status: status.as_u16(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/login/"), "http://localhost:8000/api/login/");
    }

    #[test]
    fn error_body_deserializes() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "No such chat"}"#).unwrap();
        assert_eq!(body.detail, "No such chat");
    }
}
