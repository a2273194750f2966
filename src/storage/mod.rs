//! Local persistence for prs-admin
//!
//! Only two small JSON files live on disk: the settings and the session.
//! Catalog data is always fetched from the backend.

pub mod file_io;
pub mod session;

pub use file_io::{read_json, write_json_atomic};
pub use session::SessionStore;
