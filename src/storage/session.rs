//! Persisted session state
//!
//! Written on successful login, removed on logout. Nothing else touches it.

use std::path::PathBuf;

use crate::auth::Session;
use crate::error::AdminResult;

use super::file_io::{read_json_optional, remove_if_exists, write_json_private};

/// File-backed store for the current [`Session`]
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the persisted session, if any
    pub fn load(&self) -> AdminResult<Option<Session>> {
        read_json_optional(&self.path)
    }

    /// Persist the session (owner-only permissions)
    pub fn save(&self, session: &Session) -> AdminResult<()> {
        write_json_private(&self.path, session)
    }

    /// Remove all persisted authentication state
    pub fn clear(&self) -> AdminResult<()> {
        remove_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());

        let session = Session::new("access", None, "operador1");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_without_session_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        store.clear().unwrap();
    }
}
