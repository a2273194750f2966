//! CSV export of audit entries

use std::io::Write;

use crate::audit::AuditEntry;
use crate::error::{AdminError, AdminResult};

const HEADER: [&str; 9] = [
    "ID", "Fecha", "Accion", "Entidad", "Registro", "Usuario ID", "Usuario", "Motivo", "Resumen",
];

/// One row per entry; the summary column holds the rendered diff
pub fn export_audit_csv<W: Write>(entries: &[AuditEntry], writer: &mut W) -> AdminResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let map_err = |e: csv::Error| AdminError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(map_err)?;

    for entry in entries {
        let reason = entry.reason.as_deref().unwrap_or("").trim().to_string();
        let actor = entry.actor_username.clone().unwrap_or_default();
        csv_writer
            .write_record([
                entry.id.as_str(),
                entry.at.as_str(),
                entry.action.label(),
                entry.aggregate.label(),
                entry.id_ref.as_str(),
                entry.actor_user_id.as_str(),
                actor.as_str(),
                reason.as_str(),
                entry.summary().as_str(),
            ])
            .map_err(map_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| AdminError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_carry_summary() {
        let entries: Vec<AuditEntry> = serde_json::from_value(json!([
            {
                "id": 2,
                "aggregate": "Empleado",
                "id_ref": "1020",
                "action": "UPDATED",
                "before": {"nombre": "Ana", "activo": true},
                "after": {"nombre": "Ana, M.", "activo": true},
                "actor_user_id": 1,
                "actor_username": "admin",
                "at": "2024-05-02T14:30:00Z"
            }
        ]))
        .unwrap();

        let mut out = Vec::new();
        export_audit_csv(&entries, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert!(lines.next().unwrap().starts_with("ID,Fecha,Accion"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("2,2024-05-02T14:30:00Z,Actualizado,Empleado,1020,1,admin,,"));
        assert!(row.contains("\"nombre: Ana -> Ana, M.\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut out = Vec::new();
        export_audit_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
