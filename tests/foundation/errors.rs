//! Integration tests for Error types
//!
//! Tests error construction, display, context, and classification.

use regimen_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lex() {
    let err = Error::lex("unexpected character: '#'", 2, 5, "run # tempo".to_string());
    assert!(matches!(err.kind, ErrorKind::Lex { line: 2, column: 5, .. }));
    assert_eq!(format!("{err}"), "lex error at 2:5: unexpected character: '#'");
}

#[test]
fn error_parse() {
    let err = Error::parse("unterminated choice", 1, 9, String::new());
    assert!(matches!(err.kind, ErrorKind::Parse { .. }));
    assert_eq!(format!("{err}"), "parse error at 1:9: unterminated choice");
}

#[test]
fn error_no_definitions() {
    assert_eq!(Error::no_definitions().to_string(), "no definitions");
}

#[test]
fn error_invalid_weight() {
    let err = Error::invalid_weight("lots");
    assert!(matches!(&err.kind, ErrorKind::InvalidWeight(s) if s == "lots"));
    assert_eq!(err.to_string(), "invalid number: lots");
}

#[test]
fn error_no_positive_weight() {
    let err = Error::no_positive_weight();
    assert!(matches!(err.kind, ErrorKind::NoPositiveWeight));
}

#[test]
fn error_depth_exceeded() {
    let err = Error::depth_exceeded(64, "loop");
    assert!(matches!(err.kind, ErrorKind::DepthExceeded { limit: 64, .. }));
    assert_eq!(err.to_string(), "max depth (64) exceeded while expanding loop");
}

#[test]
fn error_unknown_root() {
    assert_eq!(
        Error::unknown_root("bike").to_string(),
        "unknown root definition: bike"
    );
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn syntax_errors() {
    assert!(Error::lex("x", 1, 1, String::new()).is_syntax());
    assert!(Error::parse("x", 1, 1, String::new()).is_syntax());
    assert!(Error::no_definitions().is_syntax());
}

#[test]
fn resolution_errors_are_not_syntax() {
    assert!(!Error::invalid_weight("x").is_syntax());
    assert!(!Error::no_positive_weight().is_syntax());
    assert!(!Error::depth_exceeded(1, "a").is_syntax());
    assert!(!Error::unknown_root("a").is_syntax());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn frames_accumulate_innermost_first() {
    let err = Error::depth_exceeded(2, "a").in_frame("b").in_frame("a");
    let context = err.context.unwrap();
    assert_eq!(context.stack, vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn with_source_keeps_frames() {
    let err = Error::no_positive_weight()
        .in_frame("rest")
        .with_source("plan.txt");
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("plan.txt"));
    assert_eq!(context.stack.len(), 1);
}

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_source("plan.txt")
        .with_position(3, 7)
        .with_frame("interval");
    let text = context.to_string();
    assert!(text.starts_with("at plan.txt:3:7"));
    assert!(text.contains("  in interval"));
}

#[test]
fn with_context_replaces() {
    let err = Error::unknown_root("x")
        .with_source("first")
        .with_context(ErrorContext::new().with_source("second"));
    assert_eq!(err.context.unwrap().source.as_deref(), Some("second"));
}
