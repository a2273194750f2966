//! Path management for prs-admin
//!
//! ## Path Resolution Order
//!
//! 1. `PRS_ADMIN_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/prs-admin` on Linux, `%APPDATA%\prs\prs-admin\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::AdminError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "PRS_ADMIN_DIR";

/// Manages all paths used by prs-admin
#[derive(Debug, Clone)]
pub struct AdminPaths {
    base_dir: PathBuf,
}

impl AdminPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, AdminError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("co", "prs", "prs-admin")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    AdminError::Config("No se pudo determinar el directorio de configuracion".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create AdminPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Settings file (`config.json`)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Persisted session tokens (`session.json`)
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("prs-admin.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AdminError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            AdminError::Io(format!("No se pudo crear {}: {}", self.base_dir.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.session_file(), temp_dir.path().join("session.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("prs-admin.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AdminPaths::with_base_dir(temp_dir.path().join("nested").join("admin"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
