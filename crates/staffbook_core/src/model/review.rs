//! Review domain record.
//!
//! # Responsibility
//! - Hold one performance review: year, summary and the reviewed employee.
//! - Validate every field before it is stored on the record.
//!
//! # Invariants
//! - `year >= MIN_REVIEW_YEAR`.
//! - `summary` has non-whitespace content; it is stored exactly as given.
//! - `employee_id` resolved through `EmployeeLookup` when it was assigned.
//!   The reference is not re-checked afterwards.
//! - `id` is `None` until the first insert and is cleared again by delete.

use crate::model::employee::{EmployeeId, EmployeeLookup};
use crate::model::validation::{require_text, validate_year, RecordError, ValidationError};
use serde::Serialize;

/// Storage-generated row id of a `reviews` row.
pub type ReviewId = i64;

/// One yearly review of an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: Option<ReviewId>,
    year: i64,
    summary: String,
    employee_id: EmployeeId,
}

impl Review {
    /// Creates a transient review.
    ///
    /// Fields are checked in declaration order (year, summary, employee), so
    /// the first invalid field determines the returned error.
    ///
    /// # Errors
    /// - `RecordError::Validation` for an out-of-range year, a blank summary
    ///   or an unknown employee.
    /// - `RecordError::Db` when the employee lookup itself fails.
    pub fn new(
        year: i64,
        summary: impl Into<String>,
        employee_id: EmployeeId,
        employees: &impl EmployeeLookup,
    ) -> Result<Self, RecordError> {
        let year = validate_year(year)?;
        let summary = require_text(summary.into(), ValidationError::BlankSummary)?;
        ensure_employee_exists(employee_id, employees)?;

        Ok(Self {
            id: None,
            year,
            summary,
            employee_id,
        })
    }

    /// Rebuilds a persisted review from a row without re-running validation.
    ///
    /// Rows already satisfied the field rules when they were written, so the
    /// employee lookup is skipped on every read.
    pub(crate) fn from_storage(
        id: ReviewId,
        year: i64,
        summary: String,
        employee_id: EmployeeId,
    ) -> Self {
        Self {
            id: Some(id),
            year,
            summary,
            employee_id,
        }
    }

    pub fn id(&self) -> Option<ReviewId> {
        self.id
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns whether this review has a storage identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_year(&mut self, value: i64) -> Result<(), ValidationError> {
        self.year = validate_year(value)?;
        Ok(())
    }

    pub fn set_summary(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.summary = require_text(value.into(), ValidationError::BlankSummary)?;
        Ok(())
    }

    /// Points the review at another employee after confirming it exists.
    pub fn set_employee_id(
        &mut self,
        value: EmployeeId,
        employees: &impl EmployeeLookup,
    ) -> Result<(), RecordError> {
        ensure_employee_exists(value, employees)?;
        self.employee_id = value;
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: ReviewId) {
        self.id = Some(id);
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }
}

fn ensure_employee_exists(
    employee_id: EmployeeId,
    employees: &impl EmployeeLookup,
) -> Result<(), RecordError> {
    if employees.find_employee(employee_id)?.is_none() {
        return Err(ValidationError::UnknownEmployee { employee_id }.into());
    }
    Ok(())
}
