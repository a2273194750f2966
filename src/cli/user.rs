//! System user CLI commands

use clap::Subcommand;

use crate::api::{ApiClient, Transport};
use crate::display::format_app_user_list;
use crate::error::AdminResult;
use crate::models::{AppUser, Resource, Role};
use crate::services::AppUserService;

use super::{confirm, paged, prompt_password, read_password_stdin, ListArgs, StatusArgs};

/// System user subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List system users
    #[command(alias = "ls")]
    List(ListArgs),

    /// Create a user; the password is prompted twice
    Create {
        username: String,
        /// Grant the administrator role
        #[arg(long)]
        admin: bool,
        /// Read the password from the first line of stdin instead
        #[arg(long)]
        password_stdin: bool,
    },

    /// Change status, role, or password
    Update {
        /// Numeric user id (see `user list`)
        id: i64,
        #[command(flatten)]
        status: StatusArgs,
        /// Set the role: operador or admin
        #[arg(short, long)]
        role: Option<Role>,
        /// Prompt for a new password
        #[arg(long)]
        password: bool,
    },

    /// Delete a user
    #[command(alias = "rm")]
    Delete {
        id: i64,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a system user command
pub fn handle_user_command<T: Transport>(
    client: &ApiClient<T>,
    date_format: &str,
    cmd: UserCommands,
) -> AdminResult<()> {
    let service = AppUserService::new(client);

    match cmd {
        UserCommands::List(args) => {
            let state = paged(service.list()?, &args)?;
            println!(
                "{}",
                format_app_user_list(&state.page_items(), state.paginator(), date_format)
            );
        }

        UserCommands::Create {
            username,
            admin,
            password_stdin,
        } => {
            let (password, confirmation) = if password_stdin {
                let password = read_password_stdin()?;
                (password.clone(), password)
            } else {
                (
                    prompt_password("Contrasena: ")?,
                    prompt_password("Repetir contrasena: ")?,
                )
            };
            let role = if admin { Role::Admin } else { Role::Operator };

            service.create(&username, &password, &confirmation, role)?;
            println!("{}", AppUser::NOTICES.created);
        }

        UserCommands::Update {
            id,
            status,
            role,
            password,
        } => {
            let current = service.find(id)?;
            let new_password = if password {
                Some(prompt_password("Nueva contrasena: ")?)
            } else {
                None
            };

            service.update(
                id,
                status.value().unwrap_or(current.is_active),
                role.unwrap_or_else(|| current.role()),
                new_password.as_ref().map(|p| p.as_str()),
            )?;
            println!("{}", AppUser::NOTICES.updated);
        }

        UserCommands::Delete { id, yes } => {
            let user = service.find(id)?;
            if !yes && !confirm(&format!("Eliminar usuario {}?", user.username))? {
                println!("Cancelado.");
                return Ok(());
            }
            service.delete(id)?;
            println!("{}", AppUser::NOTICES.deleted);
        }
    }

    Ok(())
}
