//! Audit log CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::api::{ApiClient, Transport};
use crate::audit::{AuditEntry, AuditFilter};
use crate::display::format_audit_list;
use crate::error::{AdminError, AdminResult};
use crate::export::{export_audit, ExportFormat};
use crate::services::AuditService;

/// Audit subcommands
#[derive(Subcommand)]
pub enum AuditCommands {
    /// Show the most recent changes
    #[command(alias = "ls")]
    List {
        /// all, empleado, radio, or sap
        #[arg(short, long, default_value = "all")]
        aggregate: AuditFilter,
        /// Number of entries to fetch (backend allows 1-200)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Export the most recent changes
    Export {
        /// csv, json, or yaml
        #[arg(short, long)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long, default_value = "all")]
        aggregate: AuditFilter,
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

/// Handle an audit command
pub fn handle_audit_command<T: Transport>(
    client: &ApiClient<T>,
    default_limit: u32,
    date_format: &str,
    cmd: AuditCommands,
) -> AdminResult<()> {
    let service = AuditService::new(client);

    match cmd {
        AuditCommands::List { aggregate, limit } => {
            let entries = service.recent(limit.unwrap_or(default_limit))?;
            println!(
                "{}",
                format_audit_list(&aggregate.apply(&entries), date_format)
            );
        }

        AuditCommands::Export {
            format,
            output,
            aggregate,
            limit,
        } => {
            let entries = service.recent(limit.unwrap_or(default_limit))?;
            let selected: Vec<AuditEntry> =
                aggregate.apply(&entries).into_iter().cloned().collect();

            match &output {
                Some(path) => {
                    let file = File::create(path)
                        .map_err(|e| AdminError::Export(format!("{}: {}", path.display(), e)))?;
                    let mut writer = BufWriter::new(file);
                    export_audit(&selected, aggregate.label(), format, &mut writer)?;
                    writer.flush()?;
                    println!(
                        "{} registros exportados a {}",
                        selected.len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut handle = stdout.lock();
                    export_audit(&selected, aggregate.label(), format, &mut handle)?;
                }
            }
        }
    }

    Ok(())
}
