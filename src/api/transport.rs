//! HTTP transport
//!
//! The API client talks to the backend through the `Transport` trait so the
//! request/response cycle can be exercised without a network. The real
//! implementation is a blocking reqwest client bound to the configured base
//! URL.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::config::Settings;
use crate::error::{AdminError, AdminResult};

/// HTTP verbs used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Patch => write!(f, "PATCH"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request relative to the backend base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path including leading slash and query string, e.g. `/audit-log/?limit=20`
    pub path: String,
    /// Bearer token, attached as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON body for POST/PATCH
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status code plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered
///
/// Implementations return `Err` only when no response was obtained;
/// non-2xx statuses are regular responses.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse>;
}

/// Blocking reqwest transport
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> AdminResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(AdminError::Config("La URL del servidor esta vacia".into()));
        }

        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(concat!("prs-admin/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Create a transport from the loaded settings
    pub fn from_settings(settings: &Settings) -> AdminResult<Self> {
        Self::new(
            &settings.api_base_url,
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
        let url = self.url(&request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, error = %e, "request failed");
            AdminError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(method = %request.method, path = %request.path, status, "api call");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let transport = HttpTransport::new("http://localhost:8000/api/", None).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:8000/api");
        assert_eq!(
            transport.url("/empleados/"),
            "http://localhost:8000/api/empleados/"
        );
        assert_eq!(
            transport.url("audit-log/?limit=20"),
            "http://localhost:8000/api/audit-log/?limit=20"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(matches!(
            HttpTransport::new("  ", None),
            Err(AdminError::Config(_))
        ));
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(401, "").is_success());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
