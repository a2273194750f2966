//! Employee model

use serde::{Deserialize, Serialize};

use super::{default_true, Notices, Resource};
use crate::view::Searchable;

/// An employee, identified by national id number (cedula)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub cedula: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

impl Resource for Employee {
    const ENDPOINT: &'static str = "/empleados/";

    const NOTICES: Notices = Notices {
        created: "Empleado registrado.",
        updated: "Empleado actualizado.",
        deleted: "Empleado eliminado.",
    };

    fn key(&self) -> String {
        self.cedula.clone()
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.cedula.as_str(), self.name.as_str()]
    }
}

/// Body of `POST /empleados/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub cedula: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Body of `PATCH /empleados/<cedula>/`; unset fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeePatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "activo", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl EmployeePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let employee: Employee =
            serde_json::from_value(json!({"cedula": "1020", "nombre": "Ana", "activo": false}))
                .unwrap();
        assert_eq!(employee.name, "Ana");
        assert!(!employee.active);
        assert_eq!(employee.key(), "1020");
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = EmployeePatch {
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"activo": true}));
        assert!(EmployeePatch::default().is_empty());
    }
}
