//! Employee controller. The collection is append-only.

use almacen_core::Employee;
use almacen_core::keys::EMPLOYEES;
use almacen_core::validation::parse_employee;

use super::ControllerError;
use crate::store::JsonStore;

#[derive(Debug, Clone)]
pub struct EmployeeController {
    store: JsonStore,
}

impl EmployeeController {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The stored employees, or an empty list.
    #[must_use]
    pub fn load(&self) -> Vec<Employee> {
        self.store.get(EMPLOYEES, Vec::new())
    }

    /// Validate the form values and append a new employee.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Invalid`] without touching the store if any
    /// field is blank, or [`ControllerError::Store`] if the write fails.
    pub fn add(&self, id: &str, name: &str, position: &str) -> Result<Employee, ControllerError> {
        let employee = parse_employee(id, name, position)?;

        let mut employees = self.load();
        employees.push(employee.clone());
        self.store.set(EMPLOYEES, &employees)?;

        tracing::info!(id = %employee.id, total = employees.len(), "Employee added");
        Ok(employee)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use almacen_core::ValidationError;

    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let employees = EmployeeController::new(JsonStore::in_memory());
        employees.add("E1", "Luis", "Almacenista").unwrap();
        employees.add("E2", "Marta", "Cajera").unwrap();

        let loaded = employees.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Luis");
        assert_eq!(loaded[1].position, "Cajera");
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let store = JsonStore::in_memory();
        let employees = EmployeeController::new(store.clone());

        let err = employees.add("E1", "Luis", "  ").unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Invalid(ValidationError::IncompleteEmployee)
        ));
        assert!(store.backend().get_item("empleados").is_none());
    }
}
