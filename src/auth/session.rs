//! Session context
//!
//! The access/refresh token pair and the username shown in the console.
//! A `SessionContext` is created empty, `init`ialized by a successful login,
//! and `clear`ed by logout; the API client reads the bearer token from it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tokens issued by `POST /token/`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Bearer token attached to every request
    pub access_token: String,

    /// Refresh token, when the backend issues one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Username as typed at login (trimmed)
    pub username: String,

    /// When the tokens were obtained
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("logged_in_at", &self.logged_in_at)
            .finish()
    }
}

/// The session currently in effect, if any
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    /// An empty (logged out) context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context restored from persisted state
    pub fn from_session(session: Option<Session>) -> Self {
        Self { current: session }
    }

    /// Start a session after a successful login
    pub fn init(&mut self, session: Session) {
        self.current = Some(session);
    }

    /// Drop the session unconditionally
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.access_token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.username.as_str())
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_lifecycle() {
        let mut ctx = SessionContext::new();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.access_token(), None);

        ctx.init(Session::new("abc", Some("def".into()), "admin"));
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.access_token(), Some("abc"));
        assert_eq!(ctx.username(), Some("admin"));

        ctx.clear();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.username(), None);
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let session = Session::new("secret-access", Some("secret-refresh".into()), "admin");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("admin"));
    }

    #[test]
    fn test_refresh_token_is_optional_on_disk() {
        let json = r#"{"access_token":"a","username":"u","logged_in_at":"2026-01-05T10:00:00Z"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.refresh_token.is_none());
    }
}
