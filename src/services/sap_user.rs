//! SAP user service

use crate::api::{ApiClient, Transport};
use crate::error::{AdminError, AdminResult};
use crate::models::{blank_to_none, NewSapUser, SapUser, SapUserPatch};

use super::{create_one, delete_one, list_all, update_one, MSG_NOTHING_TO_UPDATE};

pub const MSG_SAP_USER_REQUIRED: &str = "Ingresa el usuario SAP.";

/// Service for the SAP user catalog
pub struct SapUserService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> SapUserService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn list(&self) -> AdminResult<Vec<SapUser>> {
        list_all(self.client)
    }

    /// Register an active SAP user, optionally linked to an employee's cedula
    pub fn create(&self, username: &str, employee_cedula: &str) -> AdminResult<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AdminError::validation(MSG_SAP_USER_REQUIRED));
        }

        let body = NewSapUser {
            username: username.to_string(),
            employee_cedula: blank_to_none(employee_cedula),
            active: true,
        };
        create_one::<T, SapUser, _>(self.client, &body)
    }

    pub fn update(&self, username: &str, patch: &SapUserPatch) -> AdminResult<()> {
        if patch.is_empty() {
            return Err(AdminError::validation(MSG_NOTHING_TO_UPDATE));
        }
        update_one::<T, SapUser, _>(self.client, username, patch)
    }

    pub fn delete(&self, username: &str) -> AdminResult<()> {
        delete_one::<T, SapUser>(self.client, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, RecordingTransport};
    use serde_json::json;

    #[test]
    fn test_blank_username_sends_nothing() {
        let client = authed_client(RecordingTransport::new());
        let err = SapUserService::new(&client).create(" ", "1020").unwrap_err();
        assert_eq!(err.to_string(), MSG_SAP_USER_REQUIRED);
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn test_create_links_cedula() {
        let client = authed_client(RecordingTransport::new().respond(201, json!({})));
        SapUserService::new(&client).create("JPEREZ", " 1020 ").unwrap();
        assert_eq!(
            client.transport().requests()[0].body,
            Some(json!({"username": "JPEREZ", "empleado_cedula": "1020", "activo": true}))
        );
    }

    #[test]
    fn test_unlinking_sends_null() {
        let client = authed_client(RecordingTransport::new().respond(200, json!({})));
        let patch = SapUserPatch {
            employee_cedula: Some(None),
            active: None,
        };
        SapUserService::new(&client).update("JPEREZ", &patch).unwrap();

        let request = &client.transport().requests()[0];
        assert_eq!(request.path, "/sap-usuarios/JPEREZ/");
        assert_eq!(request.body, Some(json!({"empleado_cedula": null})));
    }
}
