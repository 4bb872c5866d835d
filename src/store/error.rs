//! Store error types.
//!
//! Uses thiserror for the derive and miette for diagnostic codes. The only
//! failure the store reports is a missing note; input validation belongs to
//! the caller.

use miette::Diagnostic;
use thiserror::Error;

/// Note store operation errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Note not found: '{id}'")]
    #[diagnostic(code(notes_mcp::store::not_found))]
    NotFound { id: String },
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
