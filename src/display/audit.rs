//! Audit entry formatting

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::audit::AuditEntry;

/// Short local timestamp
///
/// Blank input renders as `-`; anything that doesn't parse, or a format
/// chrono rejects, is shown raw.
pub fn format_timestamp(raw: &str, format: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }

    let local = if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        Some(parsed.with_timezone(&Local))
    } else {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    };

    local
        .and_then(|dt| render(dt.format(format)))
        .unwrap_or_else(|| raw.to_string())
}

// `to_string` panics on an invalid specifier; `write!` reports it instead
fn render(formatted: impl Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

/// Multi-line block for one entry
///
/// ```text
/// [Actualizado] Empleado  02/05/24 09:30
///   1020 | Usuario #1 | admin
///   activo: Si -> No
///   Motivo: Retiro voluntario
/// ```
pub fn format_audit_entry(entry: &AuditEntry, date_format: &str) -> String {
    let mut output = format!(
        "[{}] {}  {}\n",
        entry.action.label(),
        entry.aggregate.label(),
        format_timestamp(&entry.at, date_format)
    );

    let mut meta = vec![entry.id_ref.clone(), entry.actor_label()];
    if let Some(name) = entry.actor_username.as_deref().filter(|n| !n.trim().is_empty()) {
        meta.push(name.trim().to_string());
    }
    output.push_str(&format!("  {}\n", meta.join(" | ")));
    output.push_str(&format!("  {}\n", entry.summary_or_placeholder()));

    if let Some(reason) = entry.reason_label() {
        output.push_str(&format!("  {}\n", reason));
    }
    output
}

pub fn format_audit_list(entries: &[&AuditEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return "Sin registros para mostrar.".to_string();
    }
    entries
        .iter()
        .map(|entry| format_audit_entry(entry, date_format))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamp_fallbacks() {
        assert_eq!(format_timestamp("", "%d/%m/%y %H:%M"), "-");
        assert_eq!(format_timestamp("ayer", "%d/%m/%y %H:%M"), "ayer");
        assert_eq!(
            format_timestamp("2024-05-02T14:30:00", "%d/%m/%y %H:%M"),
            "02/05/24 14:30"
        );
    }

    #[test]
    fn test_invalid_format_shows_raw() {
        assert_eq!(
            format_timestamp("2024-05-02T14:30:00Z", "%d/%m/%Q"),
            "2024-05-02T14:30:00Z"
        );
        assert_eq!(
            format_timestamp("2024-05-02T14:30:00", "%d/%m/%Q"),
            "2024-05-02T14:30:00"
        );
    }

    #[test]
    fn test_rfc3339_is_converted() {
        let text = format_timestamp("2024-05-02T14:30:00Z", "%Y");
        assert_eq!(text, "2024");
    }

    #[test]
    fn test_entry_block() {
        let entry: AuditEntry = serde_json::from_value(json!({
            "id": 9,
            "aggregate": "Empleado",
            "id_ref": "1020",
            "action": "UPDATED",
            "before": {"activo": true},
            "after": {"activo": false},
            "actor_user_id": 1,
            "actor_username": "admin",
            "reason": "Retiro voluntario",
            "at": "nope"
        }))
        .unwrap();

        let text = format_audit_entry(&entry, "%d/%m/%y %H:%M");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[Actualizado] Empleado  nope");
        assert_eq!(lines[1], "  1020 | Usuario #1 | admin");
        assert_eq!(lines[2], "  activo: Si -> No");
        assert_eq!(lines[3], "  Motivo: Retiro voluntario");
    }

    #[test]
    fn test_entry_without_changes_uses_placeholder() {
        let entry: AuditEntry = serde_json::from_value(json!({
            "aggregate": "RadioFrecuencia",
            "action": "UPDATED",
            "before": {"activo": true},
            "after": {"activo": true}
        }))
        .unwrap();
        assert!(format_audit_entry(&entry, "%Y").contains("Sin detalles adicionales."));
    }
}
