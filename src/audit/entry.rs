//! Audit entry data structures
//!
//! Defines the entries served by `/audit-log/`, the aggregate and action
//! vocabularies, and the client-side aggregate filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::diff::diff_summary;

/// Shown in place of an empty diff summary
pub const EMPTY_SUMMARY: &str = "Sin detalles adicionales.";

/// Kind of record an entry refers to
///
/// Unknown wire names are kept as-is so a new aggregate on the backend does
/// not break the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Aggregate {
    Employee,
    RadioFrequency,
    SapUser,
    Other(String),
}

impl Aggregate {
    pub fn wire_name(&self) -> &str {
        match self {
            Aggregate::Employee => "Empleado",
            Aggregate::RadioFrequency => "RadioFrecuencia",
            Aggregate::SapUser => "SapUsuario",
            Aggregate::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Aggregate::Employee => "Empleado",
            Aggregate::RadioFrequency => "Radio",
            Aggregate::SapUser => "Usuario SAP",
            Aggregate::Other(name) => name,
        }
    }
}

impl From<String> for Aggregate {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Empleado" => Aggregate::Employee,
            "RadioFrecuencia" => Aggregate::RadioFrequency,
            "SapUsuario" => Aggregate::SapUser,
            _ => Aggregate::Other(value),
        }
    }
}

impl From<Aggregate> for String {
    fn from(value: Aggregate) -> Self {
        value.wire_name().to_string()
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What happened to the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    Other(String),
}

impl AuditAction {
    pub fn wire_name(&self) -> &str {
        match self {
            AuditAction::Created => "CREATED",
            AuditAction::Updated => "UPDATED",
            AuditAction::Deleted => "DELETED",
            AuditAction::Other(name) => name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AuditAction::Created => "Creado",
            AuditAction::Updated => "Actualizado",
            AuditAction::Deleted => "Eliminado",
            AuditAction::Other(name) => name,
        }
    }
}

impl From<String> for AuditAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATED" => AuditAction::Created,
            "UPDATED" => AuditAction::Updated,
            "DELETED" => AuditAction::Deleted,
            _ => AuditAction::Other(value),
        }
    }
}

impl From<AuditAction> for String {
    fn from(value: AuditAction) -> Self {
        value.wire_name().to_string()
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single audit log entry
///
/// Ids arrive as numbers or strings depending on the backend version; both
/// are kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: String,

    pub aggregate: Aggregate,

    /// Natural key of the affected record
    #[serde(default, deserialize_with = "opaque_id")]
    pub id_ref: String,

    pub action: AuditAction,

    /// State before the mutation (absent on creation)
    #[serde(default)]
    pub before: Option<Value>,

    /// State after the mutation (absent on deletion)
    #[serde(default)]
    pub after: Option<Value>,

    #[serde(default, deserialize_with = "opaque_id")]
    pub actor_user_id: String,

    #[serde(default)]
    pub actor_username: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,

    /// ISO-8601 timestamp, kept raw so an odd value still renders
    #[serde(default)]
    pub at: String,
}

impl AuditEntry {
    /// Diff summary of this entry; empty when there is nothing to show
    pub fn summary(&self) -> String {
        diff_summary(self.before.as_ref(), self.after.as_ref(), &self.action)
    }

    /// Diff summary, or the placeholder text when it is empty
    pub fn summary_or_placeholder(&self) -> String {
        let summary = self.summary();
        if summary.is_empty() {
            EMPTY_SUMMARY.to_string()
        } else {
            summary
        }
    }

    /// `Usuario #<id>`
    pub fn actor_label(&self) -> String {
        format!("Usuario #{}", self.actor_user_id)
    }

    pub fn reason_label(&self) -> Option<String> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|r| format!("Motivo: {}", r))
    }
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Client-side filter of the audit listing by aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditFilter {
    #[default]
    All,
    Employee,
    Radio,
    SapUser,
}

impl AuditFilter {
    pub const ALL: [AuditFilter; 4] = [
        AuditFilter::All,
        AuditFilter::Employee,
        AuditFilter::Radio,
        AuditFilter::SapUser,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AuditFilter::All => "Todos",
            AuditFilter::Employee => "Empleados",
            AuditFilter::Radio => "Radios",
            AuditFilter::SapUser => "Usuarios SAP",
        }
    }

    pub fn matches(self, entry: &AuditEntry) -> bool {
        match self {
            AuditFilter::All => true,
            AuditFilter::Employee => entry.aggregate == Aggregate::Employee,
            AuditFilter::Radio => entry.aggregate == Aggregate::RadioFrequency,
            AuditFilter::SapUser => entry.aggregate == Aggregate::SapUser,
        }
    }

    pub fn apply<'a>(self, entries: &'a [AuditEntry]) -> Vec<&'a AuditEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for AuditFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(AuditFilter::All),
            "empleado" | "empleados" | "employee" => Ok(AuditFilter::Employee),
            "radio" | "radios" | "radiofrecuencia" => Ok(AuditFilter::Radio),
            "sap" | "sapusuario" | "usuario-sap" => Ok(AuditFilter::SapUser),
            other => Err(format!(
                "Filtro desconocido '{}'. Usa all, empleado, radio o sap.",
                other
            )),
        }
    }
}
