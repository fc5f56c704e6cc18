use super::{ApiClient, ApiError};
use crate::entities::{MessageResponse, Session};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Sign-in and sign-up. These endpoints are called without a bearer token.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a session. The session is returned, not
    /// stored; persisting it is the caller's decision.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = self
            .client
            .post_anonymous("/api/auth/signin")
            .json(&LoginRequest { email, password });
        let session: Session = self.client.send_json(request).await?;

        if !session.is_complete() {
            return Err(ApiError::InvalidResponse("sign-in response carried no token".to_string()));
        }
        Ok(session)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<MessageResponse, ApiError> {
        let request = self
            .client
            .post_anonymous("/api/auth/signup")
            .json(&SignupRequest { name, email, password });
        self.client.send_message(request).await
    }
}
