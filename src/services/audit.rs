//! Audit log service

use crate::api::{ApiClient, Transport};
use crate::audit::AuditEntry;
use crate::error::AdminResult;

pub const AUDIT_ENDPOINT: &str = "/audit-log/";

/// Default number of entries fetched
pub const DEFAULT_AUDIT_LIMIT: u32 = 20;

/// Read-only access to the backend's audit log
pub struct AuditService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuditService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Most recent entries, newest first; the backend clamps `limit` to 1..=200
    pub fn recent(&self, limit: u32) -> AdminResult<Vec<AuditEntry>> {
        let path = format!("{}?limit={}", AUDIT_ENDPOINT, limit);
        let entries: Vec<AuditEntry> = self.client.get(&path)?;
        tracing::debug!(count = entries.len(), limit, "fetched audit log");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Aggregate;
    use serde_json::json;

    use crate::api::testing::{authed_client, RecordingTransport};

    #[test]
    fn test_recent_requests_limit() {
        let client = authed_client(RecordingTransport::new().respond(
            200,
            json!([{
                "id": 1,
                "aggregate": "Empleado",
                "id_ref": "1020",
                "action": "CREATED",
                "before": null,
                "after": {"cedula": "1020", "nombre": "Ana", "activo": true},
                "actor_user_id": 1,
                "at": "2024-05-02T14:30:00Z"
            }]),
        ));

        let entries = AuditService::new(&client).recent(DEFAULT_AUDIT_LIMIT).unwrap();
        assert_eq!(client.transport().requests()[0].path, "/audit-log/?limit=20");
        assert_eq!(entries[0].aggregate, Aggregate::Employee);
        assert_eq!(entries[0].summary(), "cedula: 1020, nombre: Ana, activo: Si");
    }
}
