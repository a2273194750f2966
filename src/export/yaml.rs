//! YAML export of audit entries

use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::{AdminError, AdminResult};
use crate::export::json::AuditExport;

/// Export entries as YAML with a short header comment
pub fn export_audit_yaml<W: Write>(
    entries: &[AuditEntry],
    filter_label: &str,
    writer: &mut W,
) -> AdminResult<()> {
    let export = AuditExport::new(entries, filter_label);
    let map_err = |e: std::io::Error| AdminError::Export(e.to_string());

    writeln!(writer, "# prs-admin audit export").map_err(map_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(map_err)?;
    writeln!(writer, "# Filter: {}", export.filter).map_err(map_err)?;
    writeln!(writer).map_err(map_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AdminError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_has_header_and_entries() {
        let entries: Vec<AuditEntry> = serde_json::from_value(json!([{
            "id": 1,
            "aggregate": "RadioFrecuencia",
            "id_ref": "RF-01",
            "action": "CREATED",
            "after": {"codigo": "RF-01", "activo": true},
            "actor_user_id": 1,
            "at": "2024-05-02T14:30:00Z"
        }]))
        .unwrap();

        let mut out = Vec::new();
        export_audit_yaml(&entries, "Todos", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# prs-admin audit export"));
        assert!(text.contains("aggregate: RadioFrecuencia"));
        assert!(text.contains("codigo: RF-01, activo: Si"));
    }
}
