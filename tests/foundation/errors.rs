//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use satchel_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_index_out_of_bounds() {
    let err = Error::index_out_of_bounds(7, 3);
    assert!(err.is_index_out_of_bounds());
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfBounds { index: 7, length: 3 }
    ));
    assert_eq!(err.to_string(), "index out of bounds: 7 (length 3)");
}

#[test]
fn error_item_not_found() {
    let err = Error::item_not_found("mystery box");
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));
    assert!(err.to_string().contains("mystery box"));
    assert!(!err.is_index_out_of_bounds());
}

#[test]
fn error_save_not_found() {
    let err = Error::save_not_found("boss");
    assert!(matches!(err.kind, ErrorKind::SaveNotFound(_)));
    assert!(err.to_string().contains("boss"));
}

#[test]
fn error_invalid_metadata() {
    let err = Error::invalid_metadata("life");
    assert!(matches!(err.kind, ErrorKind::InvalidMetadata(_)));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_with_source_and_line() {
    let context = ErrorContext::new()
        .with_source("run.txt")
        .with_line(4)
        .with_command("shoot arrow");
    assert_eq!(context.to_string(), "at run.txt:4 in `shoot arrow`");
}

#[test]
fn context_with_line_only() {
    let context = ErrorContext::new().with_line(12);
    assert_eq!(context.to_string(), "at line 12");
}

#[test]
fn context_is_attached() {
    let err = Error::index_out_of_bounds(0, 0).with_context(ErrorContext::new().with_line(1));
    assert_eq!(err.context.as_ref().and_then(|c| c.line), Some(1));
    // Display shows the kind only.
    assert_eq!(err.to_string(), "index out of bounds: 0 (length 0)");
}

#[test]
fn errors_clone() {
    let err = Error::item_not_found("x").with_context(ErrorContext::new().with_line(2));
    let copy = err.clone();
    assert_eq!(copy.to_string(), err.to_string());
    assert_eq!(copy.context.and_then(|c| c.line), Some(2));
}
