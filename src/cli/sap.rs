//! SAP user CLI commands

use clap::Subcommand;

use crate::api::{ApiClient, Transport};
use crate::display::format_sap_user_list;
use crate::error::AdminResult;
use crate::models::{blank_to_none, Resource, SapUser, SapUserPatch};
use crate::services::SapUserService;

use super::{confirm, paged, ListArgs, StatusArgs};

/// SAP user subcommands
#[derive(Subcommand)]
pub enum SapCommands {
    /// List SAP users
    #[command(alias = "ls")]
    List(ListArgs),

    /// Register a new (active) SAP user
    Create {
        /// SAP username
        username: String,
        /// Cedula of the employee who owns the account
        #[arg(short, long, default_value = "")]
        cedula: String,
    },

    /// Change the linked employee or the status
    Update {
        username: String,
        /// Linked employee's cedula; an empty string unlinks it
        #[arg(short, long)]
        cedula: Option<String>,
        #[command(flatten)]
        status: StatusArgs,
    },

    /// Delete a SAP user
    #[command(alias = "rm")]
    Delete {
        username: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a SAP user command
pub fn handle_sap_command<T: Transport>(client: &ApiClient<T>, cmd: SapCommands) -> AdminResult<()> {
    let service = SapUserService::new(client);

    match cmd {
        SapCommands::List(args) => {
            let state = paged(service.list()?, &args)?;
            println!(
                "{}",
                format_sap_user_list(&state.page_items(), state.paginator())
            );
        }

        SapCommands::Create { username, cedula } => {
            service.create(&username, &cedula)?;
            println!("{}", SapUser::NOTICES.created);
        }

        SapCommands::Update {
            username,
            cedula,
            status,
        } => {
            let patch = SapUserPatch {
                employee_cedula: cedula.as_deref().map(blank_to_none),
                active: status.value(),
            };
            service.update(&username, &patch)?;
            println!("{}", SapUser::NOTICES.updated);
        }

        SapCommands::Delete { username, yes } => {
            if !yes && !confirm(&format!("Eliminar usuario SAP {}?", username))? {
                println!("Cancelado.");
                return Ok(());
            }
            service.delete(&username)?;
            println!("{}", SapUser::NOTICES.deleted);
        }
    }

    Ok(())
}
