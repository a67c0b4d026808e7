//! Domain records for staff reviews.
//!
//! # Responsibility
//! - Define the in-memory shape of `reviews` and `employees` rows.
//! - Enforce field validity at assignment time.
//!
//! # Invariants
//! - A record with `id() == None` has never been persisted (transient).
//! - Validating setters either accept a value in full or leave the record
//!   untouched.
//! - Only repositories may build records without validation, and only from
//!   rows they just read.

pub mod employee;
pub mod review;
pub mod validation;
