//! Tracing setup
//!
//! The command line logs to stderr. The TUI owns the terminal, so it logs to
//! `prs-admin.log` in the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AdminError, AdminResult};

/// Environment variable holding the filter directives, e.g. `prs_admin=debug`
pub const LOG_ENV_VAR: &str = "PRS_ADMIN_LOG";

const DEFAULT_LEVEL: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Log to stderr
pub fn init_stderr() -> AdminResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AdminError::Config(format!("no se pudo iniciar el registro: {}", e)))
}

/// Append to `path`, without colors
pub fn init_file(path: &Path) -> AdminResult<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AdminError::Config(format!("no se pudo iniciar el registro: {}", e)))
}
