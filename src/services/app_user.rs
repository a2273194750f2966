//! System user service

use crate::api::{ApiClient, Transport};
use crate::error::{AdminError, AdminResult};
use crate::models::{AppUser, AppUserPatch, NewAppUser, Role};

use super::{create_one, delete_one, list_all, update_one};

pub const MSG_CREDENTIALS_REQUIRED: &str = "Completa usuario y contrasena.";
pub const MSG_PASSWORD_MISMATCH: &str = "Las contrasenas no coinciden.";

/// Service for the application's own users
pub struct AppUserService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AppUserService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn list(&self) -> AdminResult<Vec<AppUser>> {
        list_all(self.client)
    }

    /// Look a user up by id in the current listing
    pub fn find(&self, id: i64) -> AdminResult<AppUser> {
        self.list()?
            .into_iter()
            .find(|user| user.id == id)
            .ok_or_else(|| AdminError::validation(format!("Usuario #{} no encontrado.", id)))
    }

    /// Create a user; the password is sent exactly as typed
    pub fn create(
        &self,
        username: &str,
        password: &str,
        confirmation: &str,
        role: Role,
    ) -> AdminResult<()> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AdminError::validation(MSG_CREDENTIALS_REQUIRED));
        }
        if password != confirmation {
            return Err(AdminError::validation(MSG_PASSWORD_MISMATCH));
        }

        let body = NewAppUser {
            username: username.to_string(),
            password: password.to_string(),
            is_staff: role.is_staff(),
        };
        create_one::<T, AppUser, _>(self.client, &body)
    }

    /// Set status and role; a blank password leaves the current one
    pub fn update(
        &self,
        id: i64,
        active: bool,
        role: Role,
        password: Option<&str>,
    ) -> AdminResult<()> {
        let patch = AppUserPatch {
            is_active: active,
            is_staff: role.is_staff(),
            password: password
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string),
        };
        update_one::<T, AppUser, _>(self.client, &id.to_string(), &patch)
    }

    pub fn delete(&self, id: i64) -> AdminResult<()> {
        delete_one::<T, AppUser>(self.client, &id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, RecordingTransport};
    use serde_json::json;

    #[test]
    fn test_missing_password_sends_nothing() {
        let client = authed_client(RecordingTransport::new());
        let err = AppUserService::new(&client)
            .create("ana", "", "", Role::Operator)
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_CREDENTIALS_REQUIRED);
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn test_mismatched_confirmation_sends_nothing() {
        let client = authed_client(RecordingTransport::new());
        let err = AppUserService::new(&client)
            .create("ana", "uno", "dos", Role::Operator)
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_PASSWORD_MISMATCH);
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn test_admin_role_sets_is_staff() {
        let client = authed_client(RecordingTransport::new().respond(201, json!({})));
        AppUserService::new(&client)
            .create(" ana ", "s3creta", "s3creta", Role::Admin)
            .unwrap();
        let request = &client.transport().requests()[0];
        assert_eq!(request.path, "/usuarios-app/");
        assert_eq!(
            request.body,
            Some(json!({"username": "ana", "password": "s3creta", "is_staff": true}))
        );
    }

    #[test]
    fn test_update_omits_blank_password() {
        let client = authed_client(
            RecordingTransport::new()
                .respond(200, json!({}))
                .respond(200, json!({})),
        );
        let service = AppUserService::new(&client);
        service.update(7, false, Role::Operator, Some("  ")).unwrap();
        service.update(7, true, Role::Admin, Some("nueva")).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].path, "/usuarios-app/7/");
        assert_eq!(
            requests[0].body,
            Some(json!({"is_active": false, "is_staff": false}))
        );
        assert_eq!(
            requests[1].body,
            Some(json!({"is_active": true, "is_staff": true, "password": "nueva"}))
        );
    }

    #[test]
    fn test_find_unknown_id() {
        let client = authed_client(RecordingTransport::new().respond(
            200,
            json!([{"id": 1, "username": "root", "is_active": true, "is_staff": true,
                    "is_superuser": true, "last_login": null}]),
        ));
        let err = AppUserService::new(&client).find(2).unwrap_err();
        assert!(err.is_validation());
    }
}
