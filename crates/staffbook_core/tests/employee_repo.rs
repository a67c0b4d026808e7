use staffbook_core::db::open_db_in_memory;
use staffbook_core::{DbError, Employee, EmployeeLookup, SqliteEmployeeRepository};

#[test]
fn save_find_update_delete_cycle() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_table().unwrap();
    repo.create_table().unwrap();

    let mut employee = Employee::new("Ada", "Engineer").unwrap();
    let id = repo.save(&mut employee).unwrap();
    assert_eq!(employee.id(), Some(id));
    assert_eq!(repo.find_by_id(id).unwrap().unwrap(), employee);

    employee.set_job_title("Staff Engineer").unwrap();
    assert_eq!(repo.save(&mut employee).unwrap(), id);
    assert_eq!(
        repo.find_employee(id).unwrap().unwrap().job_title(),
        "Staff Engineer"
    );

    repo.delete(&mut employee).unwrap();
    assert_eq!(employee.id(), None);
    assert!(repo.find_employee(id).unwrap().is_none());
}

#[test]
fn lookup_surfaces_missing_table_as_storage_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);

    let err = repo.find_employee(1).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn save_on_vanished_row_succeeds_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_table().unwrap();

    let mut employee = Employee::new("Ada", "Engineer").unwrap();
    let id = repo.save(&mut employee).unwrap();
    conn.execute("DELETE FROM employees WHERE id = ?1;", [id]).unwrap();

    assert_eq!(repo.save(&mut employee).unwrap(), id);
    assert_eq!(employee.id(), Some(id));
    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn drop_table_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::new(&conn);
    repo.create_table().unwrap();

    repo.drop_table().unwrap();
    repo.drop_table().unwrap();
}
