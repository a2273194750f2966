//! JSON export of audit entries

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::audit::AuditEntry;
use crate::error::{AdminError, AdminResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Audit export document
#[derive(Debug, Clone, Serialize)]
pub struct AuditExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Aggregate filter that was active
    pub filter: String,

    pub entry_count: usize,

    pub entries: Vec<ExportedEntry>,
}

/// An entry as fetched, plus its rendered summary
#[derive(Debug, Clone, Serialize)]
pub struct ExportedEntry {
    #[serde(flatten)]
    pub entry: AuditEntry,
    pub summary: String,
}

impl AuditExport {
    pub fn new(entries: &[AuditEntry], filter_label: &str) -> Self {
        let entries: Vec<ExportedEntry> = entries
            .iter()
            .map(|entry| ExportedEntry {
                summary: entry.summary(),
                entry: entry.clone(),
            })
            .collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter_label.to_string(),
            entry_count: entries.len(),
            entries,
        }
    }
}

/// Export entries as pretty-printed JSON
pub fn export_audit_json<W: Write>(
    entries: &[AuditEntry],
    filter_label: &str,
    writer: &mut W,
) -> AdminResult<()> {
    let export = AuditExport::new(entries, filter_label);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AdminError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AdminError::Export(e.to_string()))?;
    Ok(())
}
