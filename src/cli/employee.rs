//! Employee CLI commands

use clap::Subcommand;

use crate::api::{ApiClient, Transport};
use crate::display::format_employee_list;
use crate::error::AdminResult;
use crate::models::{Employee, EmployeePatch, Resource};
use crate::services::EmployeeService;

use super::{confirm, paged, ListArgs, StatusArgs};

/// Employee subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// List employees
    #[command(alias = "ls")]
    List(ListArgs),

    /// Register a new (active) employee
    Create {
        /// National id number
        cedula: String,
        /// Full name
        name: String,
    },

    /// Change an employee's name or status
    Update {
        cedula: String,
        /// New full name
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        status: StatusArgs,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        cedula: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an employee command
pub fn handle_employee_command<T: Transport>(
    client: &ApiClient<T>,
    cmd: EmployeeCommands,
) -> AdminResult<()> {
    let service = EmployeeService::new(client);

    match cmd {
        EmployeeCommands::List(args) => {
            let state = paged(service.list()?, &args)?;
            println!(
                "{}",
                format_employee_list(&state.page_items(), state.paginator())
            );
        }

        EmployeeCommands::Create { cedula, name } => {
            service.create(&cedula, &name)?;
            println!("{}", Employee::NOTICES.created);
        }

        EmployeeCommands::Update {
            cedula,
            name,
            status,
        } => {
            let patch = EmployeePatch {
                name: name.map(|n| n.trim().to_string()),
                active: status.value(),
            };
            service.update(&cedula, &patch)?;
            println!("{}", Employee::NOTICES.updated);
        }

        EmployeeCommands::Delete { cedula, yes } => {
            if !yes && !confirm(&format!("Eliminar empleado {}?", cedula))? {
                println!("Cancelado.");
                return Ok(());
            }
            service.delete(&cedula)?;
            println!("{}", Employee::NOTICES.deleted);
        }
    }

    Ok(())
}
