//! Field validation rules shared by domain records.

use crate::db::DbError;
use crate::model::employee::EmployeeId;
use thiserror::Error;

/// Earliest review year accepted by `Review::set_year`.
pub const MIN_REVIEW_YEAR: i64 = 2000;

/// Caller-input problem detected while assigning a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("year must be >= {min}, got {year}")]
    YearTooEarly { year: i64, min: i64 },
    #[error("summary must be a non-empty string")]
    BlankSummary,
    #[error("employee_id {employee_id} must exist in the employees table")]
    UnknownEmployee { employee_id: EmployeeId },
    #[error("employee name must be a non-empty string")]
    BlankEmployeeName,
    #[error("employee job_title must be a non-empty string")]
    BlankJobTitle,
}

/// Failure while assigning a field that needs a storage lookup.
///
/// Either the value itself is invalid, or the lookup deciding validity
/// failed in the storage engine.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
}

pub(crate) fn validate_year(year: i64) -> Result<i64, ValidationError> {
    if year < MIN_REVIEW_YEAR {
        return Err(ValidationError::YearTooEarly {
            year,
            min: MIN_REVIEW_YEAR,
        });
    }
    Ok(year)
}

/// Accepts `value` unchanged when it has visible content.
pub(crate) fn require_text(
    value: String,
    error: ValidationError,
) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{require_text, validate_year, ValidationError, MIN_REVIEW_YEAR};

    #[test]
    fn year_boundary_is_inclusive() {
        assert_eq!(validate_year(MIN_REVIEW_YEAR), Ok(MIN_REVIEW_YEAR));
        assert_eq!(
            validate_year(1999),
            Err(ValidationError::YearTooEarly {
                year: 1999,
                min: MIN_REVIEW_YEAR,
            })
        );
    }

    #[test]
    fn require_text_keeps_original_padding() {
        let kept = require_text("  solid quarter ".to_string(), ValidationError::BlankSummary)
            .expect("padded text should be accepted");
        assert_eq!(kept, "  solid quarter ");
    }

    #[test]
    fn require_text_rejects_whitespace_only() {
        let err = require_text(" \t\n".to_string(), ValidationError::BlankJobTitle).unwrap_err();
        assert_eq!(err, ValidationError::BlankJobTitle);
    }

    #[test]
    fn messages_name_the_field() {
        let message = ValidationError::UnknownEmployee { employee_id: 42 }.to_string();
        assert!(message.contains("employee_id 42"));
        assert!(ValidationError::BlankSummary.to_string().contains("summary"));
    }
}
