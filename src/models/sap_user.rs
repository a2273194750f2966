//! SAP user account model

use serde::{Deserialize, Serialize};

use super::{default_true, Notices, Resource};
use crate::view::Searchable;

/// An SAP account, optionally linked to an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SapUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub username: String,

    #[serde(rename = "empleado_id", default)]
    pub employee_id: Option<i64>,

    #[serde(rename = "empleado_cedula", default)]
    pub employee_cedula: Option<String>,

    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

impl SapUser {
    pub fn cedula_or_dash(&self) -> &str {
        match self.employee_cedula.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => "-",
        }
    }
}

impl Resource for SapUser {
    const ENDPOINT: &'static str = "/sap-usuarios/";

    const NOTICES: Notices = Notices {
        created: "Usuario SAP registrado.",
        updated: "Usuario SAP actualizado.",
        deleted: "Usuario SAP eliminado.",
    };

    fn key(&self) -> String {
        self.username.clone()
    }
}

impl Searchable for SapUser {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str()];
        if let Some(cedula) = &self.employee_cedula {
            fields.push(cedula);
        }
        fields
    }
}

/// Body of `POST /sap-usuarios/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSapUser {
    pub username: String,
    #[serde(rename = "empleado_cedula")]
    pub employee_cedula: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body of `PATCH /sap-usuarios/<username>/`
///
/// `employee_cedula: Some(None)` unlinks the employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SapUserPatch {
    #[serde(rename = "empleado_cedula", skip_serializing_if = "Option::is_none")]
    pub employee_cedula: Option<Option<String>>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl SapUserPatch {
    pub fn is_empty(&self) -> bool {
        self.employee_cedula.is_none() && self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_linked_employee() {
        let user: SapUser = serde_json::from_value(json!({
            "username": "JPEREZ",
            "empleado_id": 4,
            "empleado_cedula": "1020",
            "activo": true
        }))
        .unwrap();
        assert_eq!(user.employee_id, Some(4));
        assert_eq!(user.cedula_or_dash(), "1020");
        assert_eq!(user.search_fields(), vec!["JPEREZ", "1020"]);
    }

    #[test]
    fn test_unlinked_employee() {
        let user: SapUser =
            serde_json::from_value(json!({"username": "X", "empleado_id": null})).unwrap();
        assert_eq!(user.cedula_or_dash(), "-");
        assert!(user.active);
    }
}
