//! Tests for store error types.

use crate::store::{StoreError, StoreResult};
use miette::Diagnostic;

#[test]
fn not_found_error_displays_correctly() {
    let err = StoreError::not_found("0000002a");
    assert_eq!(err.to_string(), "Note not found: '0000002a'");
}

#[test]
fn not_found_error_has_diagnostic_code() {
    let err = StoreError::not_found("abc");
    let code = err.code().expect("diagnostic code").to_string();
    assert_eq!(code, "notes_mcp::store::not_found");
}

#[test]
fn store_result_carries_error() {
    let result: StoreResult<()> = Err(StoreError::not_found("x"));
    assert!(matches!(result, Err(StoreError::NotFound { ref id }) if id == "x"));
}
