//! Application (system) user model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Notices, Resource};
use crate::view::Searchable;

/// A user of this console or of the lending application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl AppUser {
    /// Staff and superusers are both shown as administrators
    pub fn role(&self) -> Role {
        if self.is_staff || self.is_superuser {
            Role::Admin
        } else {
            Role::Operator
        }
    }
}

impl Resource for AppUser {
    const ENDPOINT: &'static str = "/usuarios-app/";

    const NOTICES: Notices = Notices {
        created: "Usuario creado.",
        updated: "Usuario actualizado.",
        deleted: "Usuario eliminado.",
    };

    fn key(&self) -> String {
        self.id.to_string()
    }
}

impl Searchable for AppUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str()]
    }
}

/// Role offered when creating or editing a user; maps onto `is_staff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Operator,
    Admin,
}

impl Role {
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn toggled(self) -> Self {
        match self {
            Role::Operator => Role::Admin,
            Role::Admin => Role::Operator,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Operator => write!(f, "Operador"),
            Role::Admin => write!(f, "Administrador"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "operador" | "operator" => Ok(Role::Operator),
            "admin" | "administrador" => Ok(Role::Admin),
            other => Err(format!("Rol desconocido: {}", other)),
        }
    }
}

/// Body of `POST /usuarios-app/`
#[derive(Clone, PartialEq, Serialize)]
pub struct NewAppUser {
    pub username: String,
    pub password: String,
    pub is_staff: bool,
}

impl fmt::Debug for NewAppUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAppUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("is_staff", &self.is_staff)
            .finish()
    }
}

/// Body of `PATCH /usuarios-app/<id>/`
///
/// Status and role are always sent; the password only when set.
#[derive(Clone, PartialEq, Serialize)]
pub struct AppUserPatch {
    pub is_active: bool,
    pub is_staff: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for AppUserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUserPatch")
            .field("is_active", &self.is_active)
            .field("is_staff", &self.is_staff)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_superuser_is_admin() {
        let user: AppUser = serde_json::from_value(json!({
            "id": 1,
            "username": "root",
            "is_active": true,
            "is_staff": false,
            "is_superuser": true,
            "last_login": null
        }))
        .unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.key(), "1");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Operador".parse::<Role>().unwrap(), Role::Operator);
        assert!("jefe".parse::<Role>().is_err());
        assert_eq!(Role::Operator.toggled(), Role::Admin);
    }

    #[test]
    fn test_patch_without_password() {
        let patch = AppUserPatch {
            is_active: false,
            is_staff: true,
            password: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"is_active": false, "is_staff": true})
        );
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let patch = AppUserPatch {
            is_active: true,
            is_staff: false,
            password: Some("secret".into()),
        };
        let debug = format!("{:?}", patch);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
