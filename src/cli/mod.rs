//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod audit;
pub mod auth;
pub mod employee;
pub mod radio;
pub mod sap;
pub mod user;

pub use audit::{handle_audit_command, AuditCommands};
pub use auth::{handle_login, handle_logout, handle_whoami};
pub use employee::{handle_employee_command, EmployeeCommands};
pub use radio::{handle_radio_command, RadioCommands};
pub use sap::{handle_sap_command, SapCommands};
pub use user::{handle_user_command, UserCommands};

use std::io::{self, BufRead, Write};

use clap::Args;
use zeroize::Zeroizing;

use crate::error::{AdminError, AdminResult};
use crate::view::{CatalogState, Searchable};

/// `--filter` / `--page` shared by every `list` subcommand
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive search text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Page to show (8 rows per page)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

/// `--active` / `--inactive` pair for updates
#[derive(Args, Debug, Clone, Default)]
pub struct StatusArgs {
    /// Mark as active
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Mark as inactive
    #[arg(long)]
    pub inactive: bool,
}

impl StatusArgs {
    pub fn value(&self) -> Option<bool> {
        match (self.active, self.inactive) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Filter and paginate a fetched list the same way the TUI does
pub(crate) fn paged<R: Searchable>(items: Vec<R>, args: &ListArgs) -> AdminResult<CatalogState<R>> {
    let mut state = CatalogState::new();
    state.replace_items(items);
    if let Some(filter) = &args.filter {
        state.set_filter(filter.as_str());
    }
    state.go_to_page(args.page)?;
    Ok(state)
}

/// Ask a yes/no question on stdin; anything but `s`/`si`/`y`/`yes` is no
pub(crate) fn confirm(question: &str) -> AdminResult<bool> {
    print!("{} [s/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "y" | "yes"
    ))
}

/// Read one line from stdin after printing `prompt`
pub(crate) fn prompt_line(prompt: &str) -> AdminResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt for a password without echo
pub(crate) fn prompt_password(prompt: &str) -> AdminResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| AdminError::Io(format!("no se pudo leer la contrasena: {}", e)))
}

/// First line of stdin, for scripted use (`--password-stdin`)
pub(crate) fn read_password_stdin() -> AdminResult<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
