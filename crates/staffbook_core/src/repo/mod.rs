//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Own table lifecycle (`create_table`/`drop_table`) per entity.
//! - Map records to rows and back, keeping SQL inside the core crate.
//!
//! # Invariants
//! - Repositories borrow one caller-owned `Connection`; they never open or
//!   close it.
//! - Every mutating call is a single autocommitted statement.
//! - Storage failures are passed through as `RepoError::Db` untranslated.

use crate::db::DbError;
use crate::model::validation::{RecordError, ValidationError};
use thiserror::Error;

pub mod employee_repo;
pub mod review_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by record construction and persistence operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Db(#[from] DbError),
    /// `update` was called on a record that was never saved.
    #[error("record has no id; save it before updating")]
    NotPersisted,
    #[error("invalid persisted row data: {0}")]
    InvalidData(String),
}

impl From<RecordError> for RepoError {
    fn from(value: RecordError) -> Self {
        match value {
            RecordError::Validation(err) => Self::Validation(err),
            RecordError::Db(err) => Self::Db(err),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
