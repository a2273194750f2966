//! Export of the audit log
//!
//! Provides export of the fetched (and filtered) audit entries:
//! - CSV: one row per entry with its diff summary (spreadsheet-compatible)
//! - JSON: machine-readable, with export metadata
//! - YAML: human-readable, with a header comment

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::str::FromStr;

pub use self::csv::export_audit_csv;
pub use json::{export_audit_json, AuditExport, ExportedEntry, EXPORT_SCHEMA_VERSION};
pub use yaml::export_audit_yaml;

use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::AdminResult;

/// Output format for `audit export`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(format!("Formato desconocido '{}'. Usa csv, json o yaml.", other)),
        }
    }
}

/// Write `entries` in `format`
pub fn export_audit<W: Write>(
    entries: &[AuditEntry],
    filter_label: &str,
    format: ExportFormat,
    writer: &mut W,
) -> AdminResult<()> {
    match format {
        ExportFormat::Csv => export_audit_csv(entries, writer),
        ExportFormat::Json => export_audit_json(entries, filter_label, writer),
        ExportFormat::Yaml => export_audit_yaml(entries, filter_label, writer),
    }
}
