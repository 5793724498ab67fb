use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, TLS.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response; `detail` comes from the API's error body when
    /// present, otherwise the HTTP status text.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// Success status whose body didn't decode as the expected shape.
    #[error("unexpected response from server")]
    InvalidResponse(#[source] reqwest::Error),
}

impl ApiError {
    /// Whether the server rejected the caller's credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Api { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_detail() {
        let err = ApiError::Api {
            status: 400,
            detail: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn auth_failure_detection() {
        let unauthorized = ApiError::Api {
            status: 401,
            detail: "token expired".to_string(),
        };
        let server_error = ApiError::Api {
            status: 500,
            detail: "boom".to_string(),
        };
        assert!(unauthorized.is_auth_failure());
        assert!(!server_error.is_auth_failure());
    }
}
