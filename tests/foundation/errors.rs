//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use frasario_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_empty_vocabulary() {
    let err = Error::empty_vocabulary();
    assert!(err.is_empty_vocabulary());
    assert!(format!("{err}").contains("vocabulary"));
}

#[test]
fn error_unknown_verb() {
    let err = Error::unknown_verb("cantare");
    assert!(matches!(err.kind, ErrorKind::UnknownVerb(ref v) if v == "cantare"));
    assert!(!err.is_empty_vocabulary());
    assert!(format!("{err}").contains("cantare"));
}

#[test]
fn error_invalid_entry() {
    let err = Error::invalid_entry("", "source term is empty");
    let msg = format!("{err}");
    assert!(msg.contains("source term is empty"));
}

#[test]
fn error_io() {
    let err = Error::io("missing.csv", "No such file or directory");
    let msg = format!("{err}");
    assert!(msg.contains("missing.csv"));
    assert!(msg.contains("No such file"));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_parse_with_line() {
    let err = Error::parse("words.csv", Some(7), "invalid digit");
    assert_eq!(
        format!("{err}"),
        "parse error in words.csv at line 7: invalid digit"
    );
}

#[test]
fn error_display_parse_without_line() {
    let err = Error::parse("words.json", None, "expected array");
    assert_eq!(format!("{err}"), "parse error in words.json: expected array");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::unknown_verb("nuotare").with_context(
        ErrorContext::new()
            .with_source("time-expression")
            .with_frame("assemble"),
    );
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.source.as_deref(), Some("time-expression"));
    assert_eq!(ctx.stack, ["assemble"]);

    let display = ctx.to_string();
    assert!(display.starts_with("at time-expression"));
    assert!(display.contains("in assemble"));
}

#[test]
fn error_context_with_line() {
    let ctx = ErrorContext::new().with_source("words.csv").with_line(3);
    assert_eq!(ctx.to_string(), "at words.csv:3");
}

#[test]
fn error_context_default_is_empty() {
    let ctx = ErrorContext::default();
    assert!(ctx.source.is_none());
    assert!(ctx.stack.is_empty());
    assert_eq!(ctx.to_string(), "");
}
