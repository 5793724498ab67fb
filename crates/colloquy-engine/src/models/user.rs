use serde::{Deserialize, Serialize};

/// The signed-in user's profile.
///
/// Name fields are optional on the wire and default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Avatar initials: the first letter of each name, uppercased.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Bearer token pair issued at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initials_from_both_names() {
        let user = User {
            email: "ada@example.com".to_string(),
            first_name: "ada".to_string(),
            last_name: "lovelace".to_string(),
        };
        assert_eq!(user.initials(), "AL");
    }

    #[test]
    fn initials_with_missing_names() {
        let user = User {
            email: "x@example.com".to_string(),
            first_name: String::new(),
            last_name: "Turing".to_string(),
        };
        assert_eq!(user.initials(), "T");

        let blank = User {
            email: "y@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(blank.initials(), "");
    }

    #[test]
    fn user_deserializes_without_name_fields() {
        let user: User = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn tokens_roundtrip_without_refresh() {
        let tokens = AuthTokens {
            access: "abc".to_string(),
            refresh: None,
        };
        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(json, r#"{"access":"abc"}"#);

        let back: AuthTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}
