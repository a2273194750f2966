//! Custom error types for prs-admin
//!
//! This module defines the error hierarchy for the console using thiserror.
//! Every variant renders as the localized, user-facing text that ends up in
//! a notification or on stderr.

use thiserror::Error;

/// Generic message for failures that have no better description
pub const UNEXPECTED_ERROR: &str = "Ocurrio un error inesperado.";

/// The main error type for prs-admin operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration-related errors
    #[error("Error de configuracion: {0}")]
    Config(String),

    /// File I/O errors
    #[error("Error de E/S: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("Error de JSON: {0}")]
    Json(String),

    /// Client-side validation errors, raised before any network call
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response from the backend
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("No se pudo contactar al servidor: {0}")]
    Network(String),

    /// Login failures, already translated
    #[error("{0}")]
    Auth(String),

    /// A catalog call was attempted without a session
    #[error("Sesion no iniciada. Ejecuta `prs-admin login`.")]
    NotAuthenticated,

    /// The backend answered 2xx with a body we could not decode
    #[error("Respuesta invalida del servidor: {0}")]
    Decode(String),

    /// Storage errors (session/settings files)
    #[error("Error de almacenamiento: {0}")]
    Storage(String),

    /// Export errors
    #[error("Error de exportacion: {0}")]
    Export(String),
}

impl AdminError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status of the failed call, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the operator in a notification
    ///
    /// Backend, validation and auth messages are shown as-is; everything
    /// else collapses into the generic unexpected-error text plus detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) | Self::Api { .. } | Self::Auth(_) | Self::NotAuthenticated => {
                self.to_string()
            }
            Self::Network(_) => self.to_string(),
            other => format!("{} ({})", UNEXPECTED_ERROR, other),
        }
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for prs-admin operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = AdminError::validation("Ingresa cedula y nombre.");
        assert_eq!(err.to_string(), "Ingresa cedula y nombre.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = AdminError::Api {
            status: 409,
            message: "El radio tiene prestamos activos.".into(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "El radio tiene prestamos activos.");
    }

    #[test]
    fn test_unexpected_errors_get_generic_prefix() {
        let err = AdminError::Decode("missing field `cedula`".into());
        assert!(err.user_message().starts_with(UNEXPECTED_ERROR));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let admin_err: AdminError = io_err.into();
        assert!(matches!(admin_err, AdminError::Io(_)));
    }
}
