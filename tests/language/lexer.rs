//! Integration tests for the lexer
//!
//! Tests tokenization of Regimen plan source.

use regimen_foundation::ErrorKind;
use regimen_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Punctuation
// =============================================================================

#[test]
fn tokenize_punctuation() {
    assert_eq!(
        kinds("{}[]()|:,"),
        vec![
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Pipe,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Identifiers
// =============================================================================

#[test]
fn identifiers_keep_interior_spaces() {
    let tokens = Lexer::tokenize_all("lap { 1/4 mile : 1 }");
    assert_eq!(tokens[0].kind.as_ident(), Some("lap"));
    assert_eq!(tokens[2].kind, TokenKind::Ident("1/4 mile ".into()));
    assert_eq!(tokens[2].kind.as_ident(), Some("1/4 mile"));
}

#[test]
fn identifiers_allow_path_like_characters() {
    let tokens = Lexer::tokenize_all(r"warm-up\cool_down.v2");
    assert_eq!(tokens[0].kind.as_ident(), Some(r"warm-up\cool_down.v2"));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn identifiers_accept_unicode_letters() {
    let tokens = Lexer::tokenize_all("échauffement");
    assert_eq!(tokens[0].kind.as_ident(), Some("échauffement"));
}

#[test]
fn newline_ends_identifier() {
    let tokens = Lexer::tokenize_all("tempo\nrun");
    assert_eq!(tokens[0].kind.as_ident(), Some("tempo"));
    assert_eq!(tokens[1].kind.as_ident(), Some("run"));
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
}

// =============================================================================
// Spans
// =============================================================================

#[test]
fn spans_track_columns() {
    let source = "rest { 2 minutes : 2 }";
    let tokens = Lexer::tokenize_all(source);
    let colon = tokens.iter().find(|t| t.kind == TokenKind::Colon).unwrap();
    assert_eq!(colon.span.column, 18);
    assert_eq!(colon.text(source), ":");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_character_is_error_token() {
    let tokens = Lexer::tokenize_all("run # tempo");
    assert!(tokens.iter().any(|t| matches!(t.kind, TokenKind::Error(_))));
}

#[test]
fn tokenize_reports_lex_error() {
    let err = Lexer::tokenize("a {\n  b : 1 ; }").unwrap_err();
    match err.kind {
        ErrorKind::Lex {
            line,
            column,
            context,
            ..
        } => {
            assert_eq!((line, column), (2, 9));
            assert_eq!(context, "  b : 1 ; }");
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}
