//! Radio-frequency device model

use serde::{Deserialize, Serialize};

use super::{default_true, Notices, Resource};
use crate::view::Searchable;

/// A radio-frequency device, identified by its code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,

    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

impl Radio {
    pub fn description_or_dash(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => "-",
        }
    }
}

impl Resource for Radio {
    const ENDPOINT: &'static str = "/radios/";

    const NOTICES: Notices = Notices {
        created: "Radio registrado.",
        updated: "Radio actualizado.",
        deleted: "Radio eliminado.",
    };

    fn key(&self) -> String {
        self.code.clone()
    }
}

impl Searchable for Radio {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
}

/// Body of `POST /radios/`; a blank description is sent as null
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRadio {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body of `PATCH /radios/<codigo>/`
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RadioPatch {
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl RadioPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_description() {
        let radio: Radio =
            serde_json::from_value(json!({"codigo": "RF-01", "descripcion": null, "activo": true}))
                .unwrap();
        assert!(radio.description.is_none());
        assert_eq!(radio.description_or_dash(), "-");
        assert_eq!(radio.search_fields(), vec!["RF-01"]);
    }

    #[test]
    fn test_patch_clearing_description_sends_null() {
        let patch = RadioPatch {
            description: Some(None),
            active: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"descripcion": null})
        );
    }
}
