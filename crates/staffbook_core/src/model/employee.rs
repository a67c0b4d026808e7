//! Employee record and the existence check reviews depend on.

use crate::db::DbResult;
use crate::model::validation::{require_text, ValidationError};
use serde::Serialize;

/// Storage-generated row id of an `employees` row.
pub type EmployeeId = i64;

/// Resolves an employee id to its record, if one exists.
///
/// Reviews call this whenever their `employee_id` is assigned. Storage
/// failures propagate; "not found" is `Ok(None)`.
pub trait EmployeeLookup {
    fn find_employee(&self, id: EmployeeId) -> DbResult<Option<Employee>>;
}

impl<L: EmployeeLookup + ?Sized> EmployeeLookup for &L {
    fn find_employee(&self, id: EmployeeId) -> DbResult<Option<Employee>> {
        (**self).find_employee(id)
    }
}

/// A member of staff that reviews can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: Option<EmployeeId>,
    name: String,
    job_title: String,
}

impl Employee {
    /// Creates a transient employee after validating both text fields.
    pub fn new(
        name: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            name: require_text(name.into(), ValidationError::BlankEmployeeName)?,
            job_title: require_text(job_title.into(), ValidationError::BlankJobTitle)?,
        })
    }

    /// Rebuilds a persisted employee from a trusted row.
    pub(crate) fn from_storage(id: EmployeeId, name: String, job_title: String) -> Self {
        Self {
            id: Some(id),
            name,
            job_title,
        }
    }

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.name = require_text(value.into(), ValidationError::BlankEmployeeName)?;
        Ok(())
    }

    pub fn set_job_title(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.job_title = require_text(value.into(), ValidationError::BlankJobTitle)?;
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: EmployeeId) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }
}
