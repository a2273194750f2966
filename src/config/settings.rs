//! User settings for prs-admin
//!
//! Backend location, audit fetch size, and display preferences.

use serde::{Deserialize, Serialize};

use super::paths::AdminPaths;
use crate::error::AdminError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV_VAR: &str = "PRS_ADMIN_API_URL";

/// User settings for prs-admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST backend, e.g. `http://localhost:8000/api`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How many audit entries to request per refresh
    #[serde(default = "default_audit_limit")]
    pub audit_limit: u32,

    /// Per-request timeout; the HTTP client default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Timestamp format for audit entries (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_audit_limit() -> u32 {
    20
}

fn default_date_format() -> String {
    "%d/%m/%y %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            audit_limit: default_audit_limit(),
            request_timeout_secs: None,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &AdminPaths) -> Result<Self, AdminError> {
        read_json(paths.settings_file()).map_err(|e| {
            AdminError::Config(format!("No se pudo leer la configuracion: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AdminPaths) -> Result<(), AdminError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Apply a command-line / environment override of the backend URL
    pub fn with_api_url_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.to_string();
        }
        self
    }
}
