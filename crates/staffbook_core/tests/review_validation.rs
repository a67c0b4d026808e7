use proptest::prelude::*;
use staffbook_core::{
    DbResult, Employee, EmployeeId, EmployeeLookup, RecordError, Review, ValidationError,
    MIN_REVIEW_YEAR,
};

/// Lookup that knows exactly one employee id.
struct SingleEmployee(EmployeeId);

impl EmployeeLookup for SingleEmployee {
    fn find_employee(&self, id: EmployeeId) -> DbResult<Option<Employee>> {
        if id != self.0 {
            return Ok(None);
        }
        Ok(Some(Employee::new("Ada", "Engineer").unwrap()))
    }
}

fn baseline() -> Review {
    Review::new(2020, "baseline", 1, &SingleEmployee(1)).unwrap()
}

proptest! {
    #[test]
    fn years_from_minimum_are_accepted(year in MIN_REVIEW_YEAR..=i64::MAX) {
        let mut review = baseline();
        review.set_year(year).unwrap();
        prop_assert_eq!(review.year(), year);
    }

    #[test]
    fn years_before_minimum_are_rejected(year in i64::MIN..MIN_REVIEW_YEAR) {
        let mut review = baseline();
        let err = review.set_year(year).unwrap_err();
        prop_assert_eq!(err, ValidationError::YearTooEarly { year, min: MIN_REVIEW_YEAR });
        prop_assert_eq!(review.year(), 2020);
    }

    #[test]
    fn summaries_with_content_are_stored_verbatim(
        summary in "[ \t]{0,3}[A-Za-z0-9.,!]{1,40}[ \t\n]{0,3}"
    ) {
        let mut review = baseline();
        review.set_summary(summary.clone()).unwrap();
        prop_assert_eq!(review.summary(), summary.as_str());
    }

    #[test]
    fn whitespace_only_summaries_are_rejected(summary in "[ \t\r\n]{0,12}") {
        let mut review = baseline();
        prop_assert_eq!(review.set_summary(summary), Err(ValidationError::BlankSummary));
        prop_assert_eq!(review.summary(), "baseline");
    }

    #[test]
    fn employee_reference_requires_existing_employee(known in 1i64..1000, candidate in 1i64..1000) {
        let employees = SingleEmployee(known);
        let mut review = Review::new(2024, "reference", known, &employees).unwrap();

        let result = review.set_employee_id(candidate, &employees);
        if candidate == known {
            prop_assert!(result.is_ok());
        } else {
            let rejected = matches!(
                result,
                Err(RecordError::Validation(ValidationError::UnknownEmployee { employee_id }))
                    if employee_id == candidate
            );
            prop_assert!(rejected);
        }
        prop_assert_eq!(review.employee_id(), known);
    }
}

#[test]
fn review_serializes_with_column_names() {
    let review = baseline();
    let json = serde_json::to_value(&review).unwrap();

    assert_eq!(json["id"], serde_json::Value::Null);
    assert_eq!(json["year"], 2020);
    assert_eq!(json["summary"], "baseline");
    assert_eq!(json["employee_id"], 1);
}

#[test]
fn employee_requires_name_and_job_title() {
    assert_eq!(
        Employee::new(" ", "Engineer").unwrap_err(),
        ValidationError::BlankEmployeeName
    );
    assert_eq!(
        Employee::new("Ada", "").unwrap_err(),
        ValidationError::BlankJobTitle
    );

    let mut employee = Employee::new("Ada", "Engineer").unwrap();
    employee.set_job_title("\n").unwrap_err();
    assert_eq!(employee.job_title(), "Engineer");
    assert!(!employee.is_persisted());
}
