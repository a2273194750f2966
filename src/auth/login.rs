//! Login and logout
//!
//! Login exchanges credentials for a token pair at `POST /token/` and
//! translates the backend's known error details into Spanish messages.
//! Logout only forgets local state.

use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiClient, ApiRequest, Method, Transport};
use crate::error::{AdminError, AdminResult};
use crate::storage::SessionStore;

use super::session::Session;

pub const TOKEN_ENDPOINT: &str = "/token/";

pub const MSG_NO_ACTIVE_ACCOUNT: &str = "No existe una cuenta activa con esas credenciales.";
pub const MSG_INVALID_CREDENTIALS: &str = "Usuario o contraseña inválidos.";
pub const MSG_MISSING_CREDENTIALS: &str = "Debes ingresar usuario y contraseña.";
pub const MSG_ACCESS_DENIED: &str = "Acceso denegado.";
pub const MSG_INVALID_TOKEN_RESPONSE: &str = "Respuesta de autenticación inválida";

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Log in, persist the tokens, and start the client's session
///
/// On failure nothing is persisted and the current session is untouched.
pub fn login<T: Transport>(
    client: &mut ApiClient<T>,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> AdminResult<Session> {
    let username = username.trim();
    let body = serde_json::to_value(Credentials { username, password })?;
    let request = ApiRequest::new(Method::Post, TOKEN_ENDPOINT).with_body(body);

    tracing::info!(username, "requesting token pair");
    let response = client.transport().send(&request)?;

    if !response.is_success() {
        let message = auth_error_message(response.status, &response.body);
        tracing::warn!(username, status = response.status, "login rejected");
        return Err(AdminError::Auth(message));
    }

    let session = parse_token_response(&response.body, username)?;
    store.save(&session)?;
    client.session_mut().init(session.clone());

    tracing::info!(username, "logged in");
    Ok(session)
}

/// Forget the persisted tokens and the in-memory session
pub fn logout<T: Transport>(client: &mut ApiClient<T>, store: &SessionStore) -> AdminResult<()> {
    client.session_mut().clear();
    store.clear()
}

fn parse_token_response(body: &str, username: &str) -> AdminResult<Session> {
    let value: Value = serde_json::from_str(body)
        .map_err(|_| AdminError::Auth(MSG_INVALID_TOKEN_RESPONSE.to_string()))?;

    let access = value
        .get("access")
        .and_then(Value::as_str)
        .ok_or_else(|| AdminError::Auth(MSG_INVALID_TOKEN_RESPONSE.to_string()))?;
    let refresh = value
        .get("refresh")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Session::new(access, refresh, username))
}

/// Message for a rejected login
///
/// A recognized `detail` phrase wins; anything else falls back to a
/// status-keyed message.
pub fn auth_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .and_then(map_known_detail)
        .map(str::to_string)
        .unwrap_or_else(|| status_message(status))
}

fn map_known_detail(detail: &str) -> Option<&'static str> {
    let normalized = detail.trim().to_lowercase();

    if normalized.contains("no active account") {
        Some(MSG_NO_ACTIVE_ACCOUNT)
    } else if normalized.contains("invalid credentials")
        || normalized.contains("incorrect credentials")
    {
        Some(MSG_INVALID_CREDENTIALS)
    } else if normalized.contains("credentials were not provided") {
        Some(MSG_MISSING_CREDENTIALS)
    } else {
        None
    }
}

fn status_message(status: u16) -> String {
    match status {
        400 | 401 => MSG_INVALID_CREDENTIALS.to_string(),
        403 => MSG_ACCESS_DENIED.to_string(),
        other => format!("Error {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::auth::SessionContext;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup(transport: RecordingTransport) -> (TempDir, SessionStore, ApiClient<RecordingTransport>) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        let client = ApiClient::new(transport, SessionContext::new());
        (temp_dir, store, client)
    }

    #[test]
    fn test_no_active_account_is_translated() {
        let transport = RecordingTransport::new().respond(
            401,
            json!({"detail": "No active account found with the given credentials"}),
        );
        let (_dir, store, mut client) = setup(transport);

        let err = login(&mut client, &store, "ana", "secreto").unwrap_err();
        assert_eq!(err.to_string(), MSG_NO_ACTIVE_ACCOUNT);
        assert!(!client.session().is_authenticated());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_known_details() {
        assert_eq!(
            auth_error_message(400, r#"{"detail": "Invalid credentials"}"#),
            MSG_INVALID_CREDENTIALS
        );
        assert_eq!(
            auth_error_message(400, r#"{"detail": "Incorrect credentials supplied"}"#),
            MSG_INVALID_CREDENTIALS
        );
        assert_eq!(
            auth_error_message(401, r#"{"detail": "Authentication credentials were not provided."}"#),
            MSG_MISSING_CREDENTIALS
        );
    }

    #[test]
    fn test_status_fallbacks() {
        assert_eq!(auth_error_message(401, r#"{"detail": "Token blacklisted"}"#), MSG_INVALID_CREDENTIALS);
        assert_eq!(auth_error_message(400, "not json"), MSG_INVALID_CREDENTIALS);
        assert_eq!(auth_error_message(403, "{}"), MSG_ACCESS_DENIED);
        assert_eq!(auth_error_message(500, "<html>"), "Error 500");
        assert_eq!(auth_error_message(429, r#"{"detail": 5}"#), "Error 429");
    }

    #[test]
    fn test_successful_login_persists_and_inits() {
        let transport = RecordingTransport::new()
            .respond(200, json!({"access": "acc-1", "refresh": "ref-1"}));
        let (_dir, store, mut client) = setup(transport);

        let session = login(&mut client, &store, "  ana  ", "secreto").unwrap();
        assert_eq!(session.username, "ana");
        assert_eq!(session.refresh_token.as_deref(), Some("ref-1"));
        assert_eq!(client.session().access_token(), Some("acc-1"));
        assert_eq!(store.load().unwrap().unwrap().access_token, "acc-1");

        let request = &client.transport().requests()[0];
        assert_eq!(request.path, TOKEN_ENDPOINT);
        assert!(request.bearer.is_none());
        assert_eq!(
            request.body,
            Some(json!({"username": "ana", "password": "secreto"}))
        );
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let transport = RecordingTransport::new().respond(200, json!({"refresh": "r"}));
        let (_dir, store, mut client) = setup(transport);

        let err = login(&mut client, &store, "ana", "x").unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_TOKEN_RESPONSE);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_logout_clears_everything_without_network() {
        let transport = RecordingTransport::new().respond(200, json!({"access": "a"}));
        let (_dir, store, mut client) = setup(transport);
        login(&mut client, &store, "ana", "x").unwrap();

        logout(&mut client, &store).unwrap();
        assert!(!client.session().is_authenticated());
        assert!(store.load().unwrap().is_none());
        assert_eq!(client.transport().request_count(), 1);
    }
}
