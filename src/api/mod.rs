//! REST access to the backend
//!
//! - `transport`: the `Transport` seam and its reqwest implementation
//! - `client`: bearer-authenticated JSON calls with error-message extraction

pub mod client;
pub mod transport;

pub use client::{extract_error_message, item_path, ApiClient};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// In-memory transport for tests: records requests, replays queued responses
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use serde_json::Value;

    use super::{ApiClient, ApiRequest, ApiResponse, Transport};
    use crate::auth::{Session, SessionContext};
    use crate::error::{AdminError, AdminResult};

    #[derive(Default)]
    pub struct RecordingTransport {
        requests: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<ApiResponse>>,
    }

    impl RecordingTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a JSON response
        pub fn respond(self, status: u16, body: Value) -> Self {
            self.respond_raw(status, body.to_string())
        }

        /// Queue a response with a raw body
        pub fn respond_raw(self, status: u16, body: impl Into<String>) -> Self {
            self.responses
                .borrow_mut()
                .push_back(ApiResponse::new(status, body));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: &ApiRequest) -> AdminResult<ApiResponse> {
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| AdminError::Network("no queued response".into()))
        }
    }

    /// Client with a logged-in session whose access token is `test-access`
    pub fn authed_client(transport: RecordingTransport) -> ApiClient<RecordingTransport> {
        ApiClient::new(
            transport,
            SessionContext::from_session(Some(Session::new("test-access", None, "admin"))),
        )
    }
}
