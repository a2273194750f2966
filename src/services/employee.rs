//! Employee service

use crate::api::{ApiClient, Transport};
use crate::error::{AdminError, AdminResult};
use crate::models::{Employee, EmployeePatch, NewEmployee};

use super::{create_one, delete_one, list_all, update_one, MSG_NOTHING_TO_UPDATE};

pub const MSG_EMPLOYEE_REQUIRED: &str = "Ingresa cedula y nombre.";

/// Service for the employee catalog
pub struct EmployeeService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> EmployeeService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn list(&self) -> AdminResult<Vec<Employee>> {
        list_all(self.client)
    }

    /// Register an active employee
    pub fn create(&self, cedula: &str, name: &str) -> AdminResult<()> {
        let cedula = cedula.trim();
        let name = name.trim();
        if cedula.is_empty() || name.is_empty() {
            return Err(AdminError::validation(MSG_EMPLOYEE_REQUIRED));
        }

        let body = NewEmployee {
            cedula: cedula.to_string(),
            name: name.to_string(),
            active: true,
        };
        create_one::<T, Employee, _>(self.client, &body)
    }

    pub fn update(&self, cedula: &str, patch: &EmployeePatch) -> AdminResult<()> {
        if patch.is_empty() {
            return Err(AdminError::validation(MSG_NOTHING_TO_UPDATE));
        }
        update_one::<T, Employee, _>(self.client, cedula, patch)
    }

    pub fn delete(&self, cedula: &str) -> AdminResult<()> {
        delete_one::<T, Employee>(self.client, cedula)
    }
}
