use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Proof of authentication returned by `POST /api/auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    #[serde(alias = "accessToken")]
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

impl Session {
    pub fn new(id: i64, token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            token: token.into(),
            token_type: default_token_type(),
            name: None,
            email: email.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// A session without a token is never stored nor handed to clients.
    pub fn is_complete(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.email.is_empty() => &self.email,
            _ => "User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_signin_payload() {
        let json = r#"{"token":"abc","type":"Bearer","id":7,"name":"Ada","email":"ada@example.com"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.id, 7);
        assert_eq!(session.display_name(), "Ada");
    }

    #[test]
    fn accepts_access_token_alias() {
        let json = r#"{"accessToken":"xyz","id":1,"email":"a@b.c"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.token, "xyz");
        assert_eq!(session.token_type, "Bearer");
        assert_eq!(session.display_name(), "a@b.c");
    }

    #[test]
    fn blank_token_is_incomplete() {
        assert!(!Session::new(1, "  ", "a@b.c").is_complete());
        assert!(Session::new(1, "t", "").is_complete());
        assert_eq!(Session::new(1, "t", "").display_name(), "User");
    }
}
