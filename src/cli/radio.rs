//! Radio CLI commands

use clap::Subcommand;

use crate::api::{ApiClient, Transport};
use crate::display::format_radio_list;
use crate::error::AdminResult;
use crate::models::{blank_to_none, Radio, RadioPatch, Resource};
use crate::services::RadioService;

use super::{confirm, paged, ListArgs, StatusArgs};

/// Radio subcommands
#[derive(Subcommand)]
pub enum RadioCommands {
    /// List radios
    #[command(alias = "ls")]
    List(ListArgs),

    /// Register a new (active) radio
    Create {
        /// Device code
        code: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Change a radio's description or status
    Update {
        code: String,
        /// New description; an empty string clears it
        #[arg(short, long)]
        description: Option<String>,
        #[command(flatten)]
        status: StatusArgs,
    },

    /// Delete a radio
    #[command(alias = "rm")]
    Delete {
        code: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a radio command
pub fn handle_radio_command<T: Transport>(client: &ApiClient<T>, cmd: RadioCommands) -> AdminResult<()> {
    let service = RadioService::new(client);

    match cmd {
        RadioCommands::List(args) => {
            let state = paged(service.list()?, &args)?;
            println!("{}", format_radio_list(&state.page_items(), state.paginator()));
        }

        RadioCommands::Create { code, description } => {
            service.create(&code, &description)?;
            println!("{}", Radio::NOTICES.created);
        }

        RadioCommands::Update {
            code,
            description,
            status,
        } => {
            let patch = RadioPatch {
                description: description.as_deref().map(blank_to_none),
                active: status.value(),
            };
            service.update(&code, &patch)?;
            println!("{}", Radio::NOTICES.updated);
        }

        RadioCommands::Delete { code, yes } => {
            if !yes && !confirm(&format!("Eliminar radio {}?", code))? {
                println!("Cancelado.");
                return Ok(());
            }
            service.delete(&code)?;
            println!("{}", Radio::NOTICES.deleted);
        }
    }

    Ok(())
}
