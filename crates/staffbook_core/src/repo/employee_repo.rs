//! Minimal employee persistence backing the review foreign key.
//!
//! Only the pieces reviews depend on live here: the `employees` table,
//! insert/update, lookup by id and delete.

use crate::db::DbResult;
use crate::model::employee::{Employee, EmployeeId, EmployeeLookup};
use crate::repo::RepoResult;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

const CREATE_EMPLOYEES_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    job_title TEXT NOT NULL
);";

/// SQLite-backed employee repository and existence check.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_EMPLOYEES_SQL)?;
        debug!("event=table_create module=repo status=ok table=employees");
        Ok(())
    }

    pub fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch("DROP TABLE IF EXISTS employees;")?;
        debug!("event=table_drop module=repo status=ok table=employees");
        Ok(())
    }

    /// Inserts a transient employee or updates a persisted one.
    pub fn save(&self, employee: &mut Employee) -> RepoResult<EmployeeId> {
        if let Some(id) = employee.id() {
            let changed = self.conn.execute(
                "UPDATE employees SET name = ?1, job_title = ?2 WHERE id = ?3;",
                params![employee.name(), employee.job_title(), id],
            )?;
            debug!(
                "event=employee_update module=repo status=ok employee_id={id} rows={changed}"
            );
            return Ok(id);
        }

        self.conn.execute(
            "INSERT INTO employees (name, job_title) VALUES (?1, ?2);",
            params![employee.name(), employee.job_title()],
        )?;
        let id = self.conn.last_insert_rowid();
        employee.assign_id(id);
        debug!("event=employee_insert module=repo status=ok employee_id={id}");
        Ok(id)
    }

    pub fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.query_employee(id)?)
    }

    /// Deletes the matching row and clears `employee.id()`.
    ///
    /// Fails with a storage error while reviews still reference the row.
    pub fn delete(&self, employee: &mut Employee) -> RepoResult<()> {
        if let Some(id) = employee.id() {
            self.conn
                .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        }
        employee.clear_id();
        Ok(())
    }

    fn query_employee(&self, id: EmployeeId) -> DbResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                "SELECT id, name, job_title FROM employees WHERE id = ?1;",
                [id],
                |row| Ok(Employee::from_storage(row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        Ok(employee)
    }
}

impl EmployeeLookup for SqliteEmployeeRepository<'_> {
    fn find_employee(&self, id: EmployeeId) -> DbResult<Option<Employee>> {
        self.query_employee(id)
    }
}
