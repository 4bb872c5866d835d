//! Request handling errors.
//!
//! Two kinds exist: validation failures (a request field is missing or
//! malformed, detected before the store is touched) and missing notes.
//! Both are recovered at the handler boundary and converted into protocol
//! errors; neither is ever fatal to the process.

use miette::Diagnostic;
use rmcp::ErrorData as McpError;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Invalid '{field}': {message}")]
    #[diagnostic(code(notes_mcp::mcp::validation))]
    Validation { field: String, message: String },

    #[error("Note not found: '{id}'")]
    #[diagnostic(code(notes_mcp::mcp::not_found))]
    NotFound { id: String },
}

impl HandlerError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        HandlerError::Validation {
            field: field.into(),
            message: "missing required field".to_string(),
        }
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        HandlerError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, HandlerError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HandlerError::NotFound { .. })
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => HandlerError::NotFound { id },
        }
    }
}

impl From<HandlerError> for McpError {
    fn from(err: HandlerError) -> Self {
        let message = err.to_string();
        match err {
            HandlerError::Validation { field, .. } => McpError::invalid_params(
                message,
                Some(json!({"error": "validation_error", "field": field})),
            ),
            HandlerError::NotFound { id } => McpError::resource_not_found(
                message,
                Some(json!({"error": "note_not_found", "id": id})),
            ),
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;
