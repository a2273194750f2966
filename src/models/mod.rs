//! Catalog records exchanged with the backend
//!
//! Each record maps the backend's Spanish wire names onto English field
//! names and carries the payload types used to create and patch it.

pub mod app_user;
pub mod employee;
pub mod radio;
pub mod sap_user;

pub use app_user::{AppUser, AppUserPatch, NewAppUser, Role};
pub use employee::{Employee, EmployeePatch, NewEmployee};
pub use radio::{NewRadio, Radio, RadioPatch};
pub use sap_user::{NewSapUser, SapUser, SapUserPatch};

use serde::de::DeserializeOwned;

/// Notification texts shown after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notices {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// A record served under its own REST collection
pub trait Resource: DeserializeOwned + Clone {
    /// Collection path, with leading and trailing slash
    const ENDPOINT: &'static str;

    const NOTICES: Notices;

    /// Value used in the item URL
    fn key(&self) -> String;
}

/// Trim a free-text field; blank becomes `None` (sent as JSON null)
pub(crate) fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn default_true() -> bool {
    true
}
