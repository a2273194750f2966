//! Configuration module for prs-admin
//!
//! - Path resolution (base directory, settings, session, log files)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AdminPaths;
pub use settings::Settings;
