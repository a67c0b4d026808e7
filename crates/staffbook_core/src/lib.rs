//! Core persistence for staff reviews.
//! This crate is the single source of truth for review field rules and the
//! mapping between `Review` records and `reviews` rows.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::employee::{Employee, EmployeeId, EmployeeLookup};
pub use model::review::{Review, ReviewId};
pub use model::validation::{RecordError, ValidationError, MIN_REVIEW_YEAR};
pub use repo::employee_repo::SqliteEmployeeRepository;
pub use repo::review_repo::{ReviewRepository, SqliteReviewRepository};
pub use repo::{RepoError, RepoResult};
pub use service::review_service::ReviewService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
