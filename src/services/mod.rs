//! Service layer for prs-admin
//!
//! Services validate user input, build the wire payloads, and call the
//! backend through an [`ApiClient`]. Validation always happens before any
//! request is sent.

pub mod app_user;
pub mod audit;
pub mod employee;
pub mod radio;
pub mod sap_user;

pub use app_user::AppUserService;
pub use audit::AuditService;
pub use employee::EmployeeService;
pub use radio::RadioService;
pub use sap_user::SapUserService;

use serde::Serialize;
use serde_json::Value;

use crate::api::{item_path, ApiClient, Transport};
use crate::error::{AdminError, AdminResult};
use crate::models::Resource;

pub const MSG_MISSING_KEY: &str = "Indica el registro a modificar.";
pub const MSG_NOTHING_TO_UPDATE: &str = "No hay cambios para guardar.";

/// GET the whole collection of `R`
fn list_all<T: Transport, R: Resource>(client: &ApiClient<T>) -> AdminResult<Vec<R>> {
    let items: Vec<R> = client.get(R::ENDPOINT)?;
    tracing::debug!(endpoint = R::ENDPOINT, count = items.len(), "fetched collection");
    Ok(items)
}

fn create_one<T: Transport, R: Resource, B: Serialize>(
    client: &ApiClient<T>,
    body: &B,
) -> AdminResult<()> {
    let _: Value = client.post(R::ENDPOINT, body)?;
    tracing::info!(endpoint = R::ENDPOINT, "record created");
    Ok(())
}

fn update_one<T: Transport, R: Resource, B: Serialize>(
    client: &ApiClient<T>,
    key: &str,
    patch: &B,
) -> AdminResult<()> {
    let path = item_path(R::ENDPOINT, checked_key(key)?);
    let _: Value = client.patch(&path, patch)?;
    tracing::info!(%path, "record updated");
    Ok(())
}

fn delete_one<T: Transport, R: Resource>(client: &ApiClient<T>, key: &str) -> AdminResult<()> {
    let path = item_path(R::ENDPOINT, checked_key(key)?);
    client.delete(&path)?;
    tracing::info!(%path, "record deleted");
    Ok(())
}

fn checked_key(key: &str) -> AdminResult<&str> {
    let key = key.trim();
    if key.is_empty() {
        Err(AdminError::validation(MSG_MISSING_KEY))
    } else {
        Ok(key)
    }
}
