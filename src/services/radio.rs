//! Radio-frequency device service

use crate::api::{ApiClient, Transport};
use crate::error::{AdminError, AdminResult};
use crate::models::{blank_to_none, NewRadio, Radio, RadioPatch};

use super::{create_one, delete_one, list_all, update_one, MSG_NOTHING_TO_UPDATE};

pub const MSG_RADIO_REQUIRED: &str = "Ingresa el codigo.";

/// Service for the radio catalog
pub struct RadioService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> RadioService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn list(&self) -> AdminResult<Vec<Radio>> {
        list_all(self.client)
    }

    /// Register an active radio; a blank description is stored as null
    pub fn create(&self, code: &str, description: &str) -> AdminResult<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AdminError::validation(MSG_RADIO_REQUIRED));
        }

        let body = NewRadio {
            code: code.to_string(),
            description: blank_to_none(description),
            active: true,
        };
        create_one::<T, Radio, _>(self.client, &body)
    }

    pub fn update(&self, code: &str, patch: &RadioPatch) -> AdminResult<()> {
        if patch.is_empty() {
            return Err(AdminError::validation(MSG_NOTHING_TO_UPDATE));
        }
        update_one::<T, Radio, _>(self.client, code, patch)
    }

    pub fn delete(&self, code: &str) -> AdminResult<()> {
        delete_one::<T, Radio>(self.client, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{authed_client, RecordingTransport};
    use serde_json::json;

    #[test]
    fn test_blank_code_sends_nothing() {
        let client = authed_client(RecordingTransport::new());
        let err = RadioService::new(&client).create("", "Motorola").unwrap_err();
        assert_eq!(err.to_string(), MSG_RADIO_REQUIRED);
        assert_eq!(client.transport().request_count(), 0);
    }

    #[test]
    fn test_blank_description_is_null() {
        let client = authed_client(RecordingTransport::new().respond(201, json!({})));
        RadioService::new(&client).create("RF-01", "   ").unwrap();
        assert_eq!(
            client.transport().requests()[0].body,
            Some(json!({"codigo": "RF-01", "descripcion": null, "activo": true}))
        );
    }

    #[test]
    fn test_key_is_url_encoded() {
        let client = authed_client(RecordingTransport::new().respond_raw(204, ""));
        RadioService::new(&client).delete("RF 01/B").unwrap();
        assert_eq!(client.transport().requests()[0].path, "/radios/RF%2001%2FB/");
    }

    #[test]
    fn test_list_decodes_collection() {
        let client = authed_client(RecordingTransport::new().respond(
            200,
            json!([
                {"codigo": "RF-01", "descripcion": "Motorola", "activo": true},
                {"codigo": "RF-02", "descripcion": null, "activo": false}
            ]),
        ));
        let radios = RadioService::new(&client).list().unwrap();
        assert_eq!(radios.len(), 2);
        assert_eq!(radios[1].description_or_dash(), "-");
        assert!(!radios[1].active);
    }
}
