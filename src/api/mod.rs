//! HTTP clients for the remote project/task service.
//!
//! Every client wraps a shared [`ApiClient`], which resolves paths against the
//! configured base URL and attaches `Authorization: Bearer <token>` read from
//! the [`SessionContext`] immediately before each request. Errors are passed
//! through to the caller; nothing here retries.

use crate::entities::MessageResponse;
use crate::session::SessionContext;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

pub mod auth;
pub mod projects;
pub mod tasks;

pub use auth::AuthApi;
pub use projects::ProjectsApi;
pub use tasks::TasksApi;

/// Errors produced by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {message} (Status: {status})")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a non-success response, keeping the server's own message.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string())
        });

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 | 403 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            status => Self::Status { status, message },
        }
    }

    /// Message suitable for showing to the user as-is.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(message) | Self::BadRequest(message) | Self::NotFound(message) => message.clone(),
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<MessageResponse>(body) {
        Ok(parsed) if !parsed.message.is_empty() => Some(parsed.message),
        Ok(_) if body.starts_with('{') => None,
        _ => Some(body.to_string()),
    }
}

/// Shared transport for all API clients.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// JSON content type plus the bearer token of the current session.
    /// The authorization header is left out while signed out.
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("Stored token is not a valid header value, sending request without it"),
            }
        }
        headers
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path)).headers(self.auth_headers())
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path)).headers(self.auth_headers())
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path)).headers(self.auth_headers())
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path)).headers(self.auth_headers())
    }

    /// POST without credentials, for the sign-in and sign-up endpoints.
    pub(crate) fn post_anonymous(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.url(path))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    /// Sends the request and decodes a JSON body into `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Sends the request and reads a `{ message }` body. An empty body yields
    /// an empty message; a non-JSON body becomes the message verbatim.
    pub(crate) async fn send_message(&self, request: RequestBuilder) -> Result<MessageResponse, ApiError> {
        let body = self.send(request).await?;
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(MessageResponse::default());
        }
        Ok(serde_json::from_str(trimmed).unwrap_or_else(|_| MessageResponse::new(trimmed)))
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        if status.is_success() {
            log::debug!("{} {}", status.as_u16(), url);
            Ok(body)
        } else {
            let error = ApiError::from_status(status, &body);
            log::warn!("{} {}: {}", status.as_u16(), url, error);
            Err(error)
        }
    }
}

/// All clients of the service, built over one [`ApiClient`].
#[derive(Debug, Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub projects: ProjectsApi,
    pub tasks: TasksApi,
}

impl Api {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        let client = ApiClient::new(base_url, session);
        Self {
            auth: AuthApi::new(client.clone()),
            projects: ProjectsApi::new(client.clone()),
            tasks: TasksApi::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_message_field() {
        assert_eq!(
            server_message(r#"{"message":"Erreur : Projet introuvable."}"#).as_deref(),
            Some("Erreur : Projet introuvable.")
        );
    }

    #[test]
    fn server_message_falls_back_to_raw_text() {
        assert_eq!(server_message("Bad credentials").as_deref(), Some("Bad credentials"));
        assert_eq!(server_message("   "), None);
        assert_eq!(server_message(r#"{"error":"x"}"#), None);
    }

    #[test]
    fn from_status_classifies() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, ""),
            ApiError::Unauthorized(m) if m == "Unauthorized"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, ""),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::Status { status: 500, message } if message == "boom"
        ));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8081/", SessionContext::in_memory());
        assert_eq!(client.url("/api/projects"), "http://localhost:8081/api/projects");
        assert_eq!(client.url("api/tasks/3"), "http://localhost:8081/api/tasks/3");
    }
}
