//! Cross-cutting error types for the activity tracker.
//!
//! Storage, configuration, and report errors live in their own crates. The
//! CLI converges all of them into `anyhow`.

use thiserror::Error;

/// Errors raised by domain operations on tickets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Lookup by ID returned no result.
    #[error("Ticket not found: {id}")]
    NotFound { id: String },

    /// A required field was empty when saving.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// Data failed validation (catalog membership, date format).
    #[error("Validation error: {0}")]
    Validation(String),
}
