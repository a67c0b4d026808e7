//! SQLite storage bootstrap.
//!
//! # Responsibility
//! - Open and configure the single connection handle shared by repositories.
//! - Define the opaque storage error surfaced by every persistence call.
//!
//! # Invariants
//! - Returned connections run in autocommit mode; every statement is durable
//!   once the call returns.
//! - No schema is created here. Tables are owned by their repositories.

use thiserror::Error;

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage engine failure, passed through untranslated.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl DbError {
    /// Returns the SQLite extended error code when the engine reported one.
    pub fn sqlite_error_code(&self) -> Option<rusqlite::ErrorCode> {
        match self {
            Self::Sqlite(err) => err.sqlite_error_code(),
        }
    }
}
