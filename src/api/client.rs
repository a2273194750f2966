//! Authenticated API client
//!
//! Wraps a [`Transport`] with the session's bearer token, JSON encoding of
//! request bodies, decoding of success bodies, and extraction of a readable
//! message from error bodies.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::auth::SessionContext;
use crate::error::{AdminError, AdminResult};

use super::transport::{ApiRequest, ApiResponse, Method, Transport};

/// REST client bound to a session
pub struct ApiClient<T: Transport> {
    transport: T,
    session: SessionContext,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: SessionContext) -> Self {
        Self { transport, session }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    /// GET and decode a JSON body
    pub fn get<R: DeserializeOwned>(&self, path: &str) -> AdminResult<R> {
        decode(self.send(Method::Get, path, None)?)
    }

    /// POST a JSON body and decode the answer
    pub fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> AdminResult<R> {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::Post, path, Some(body))?)
    }

    /// PATCH a JSON body and decode the answer
    pub fn patch<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> AdminResult<R> {
        let body = serde_json::to_value(body)?;
        decode(self.send(Method::Patch, path, Some(body))?)
    }

    /// DELETE; the body (usually empty on 204) is ignored
    pub fn delete(&self, path: &str) -> AdminResult<()> {
        self.send(Method::Delete, path, None).map(|_| ())
    }

    fn send(&self, method: Method, path: &str, body: Option<Value>) -> AdminResult<ApiResponse> {
        let token = self
            .session
            .access_token()
            .ok_or(AdminError::NotAuthenticated)?;

        let mut request = ApiRequest::new(method, path).with_bearer(token);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.transport.send(&request)?;
        if !response.is_success() {
            let message = extract_error_message(response.status, &response.body);
            tracing::warn!(%method, path, status = response.status, %message, "backend rejected request");
            return Err(AdminError::Api {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }
}

fn decode<R: DeserializeOwned>(response: ApiResponse) -> AdminResult<R> {
    // 204 / empty bodies decode as JSON null
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    serde_json::from_str(body).map_err(|e| AdminError::Decode(e.to_string()))
}

/// Item URL: `<endpoint><url-encoded key>/`
pub fn item_path(endpoint: &str, key: &str) -> String {
    format!("{}{}/", endpoint, urlencoding::encode(key))
}

/// Pull a human-readable message out of an error body
///
/// Order: `detail` string, then the first field error (`field: message`,
/// without the prefix for `non_field_errors`), then a bare string or list of
/// strings, then `Error <status>`.
pub fn extract_error_message(status: u16, body: &str) -> String {
    let fallback = || format!("Error {}", status);

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    match &value {
        Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(first_text) {
                return detail;
            }
            map.iter()
                .find_map(|(field, v)| {
                    first_text(v).map(|msg| {
                        if field == "non_field_errors" {
                            msg
                        } else {
                            format!("{}: {}", field, msg)
                        }
                    })
                })
                .unwrap_or_else(fallback)
        }
        other => first_text(other).unwrap_or_else(fallback),
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, RecordingTransport};
    use serde_json::json;

    #[test]
    fn test_detail_wins() {
        let body = r#"{"detail": "No encontrado", "cedula": ["otro"]}"#;
        assert_eq!(extract_error_message(404, body), "No encontrado");
    }

    #[test]
    fn test_first_field_error() {
        let body = r#"{"username": ["Ya existe un usuario con ese nombre."]}"#;
        assert_eq!(
            extract_error_message(400, body),
            "username: Ya existe un usuario con ese nombre."
        );
    }

    #[test]
    fn test_non_field_errors_have_no_prefix() {
        let body = r#"{"non_field_errors": ["Datos inconsistentes."]}"#;
        assert_eq!(extract_error_message(400, body), "Datos inconsistentes.");
    }

    #[test]
    fn test_unparsable_body_falls_back_to_status() {
        assert_eq!(extract_error_message(502, "<html>Bad gateway</html>"), "Error 502");
        assert_eq!(extract_error_message(500, ""), "Error 500");
        assert_eq!(extract_error_message(400, "{}"), "Error 400");
    }

    #[test]
    fn test_item_path_encodes_key() {
        assert_eq!(item_path("/radios/", "RF 01/A"), "/radios/RF%2001%2FA/");
        assert_eq!(item_path("/empleados/", "1020"), "/empleados/1020/");
    }

    #[test]
    fn test_requests_carry_bearer_token() {
        let client = authed_client(RecordingTransport::new().respond(200, json!([])));
        let items: Vec<Value> = client.get("/radios/").unwrap();
        assert!(items.is_empty());

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].bearer.as_deref(), Some("test-access"));
    }

    #[test]
    fn test_no_session_means_no_request() {
        let client = ApiClient::new(RecordingTransport::new(), SessionContext::new());
        let result: AdminResult<Value> = client.get("/radios/");
        assert!(matches!(result, Err(AdminError::NotAuthenticated)));
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn test_error_status_becomes_api_error() {
        let client = authed_client(
            RecordingTransport::new().respond(409, json!({"detail": "Radio prestado."})),
        );
        let err = client.delete("/radios/RF1/").unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "Radio prestado.");
    }

    #[test]
    fn test_empty_success_body_decodes_as_null() {
        let client = authed_client(RecordingTransport::new().respond_raw(204, ""));
        let value: Value = client.patch("/radios/RF1/", &json!({"activo": false})).unwrap();
        assert!(value.is_null());
    }
}
