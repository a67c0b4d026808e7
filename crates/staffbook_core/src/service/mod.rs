//! Core use-case services.
//!
//! # Responsibility
//! - Combine the employee existence check with review persistence.
//! - Keep callers decoupled from the concrete storage backend.

pub mod review_service;
