//! Lexer for the Regimen DSL.
//!
//! The lexer converts source text into a stream of tokens. There are only
//! three token classes: whitespace (skipped), identifiers, and single
//! character punctuation.

use regimen_foundation::{Error, Result};

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for Regimen plan source.
///
/// The lexer iterates through source text and produces tokens.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Unrecognized characters come back as [`TokenKind::Error`] so the
    /// parser can report them with position information.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => self.punct(TokenKind::LParen),
            ')' => self.punct(TokenKind::RParen),
            '[' => self.punct(TokenKind::LBracket),
            ']' => self.punct(TokenKind::RBracket),
            '{' => self.punct(TokenKind::LBrace),
            '}' => self.punct(TokenKind::RBrace),
            '|' => self.punct(TokenKind::Pipe),
            ':' => self.punct(TokenKind::Colon),
            ',' => self.punct(TokenKind::Comma),
            c if is_ident_char(c) => self.scan_ident(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c:?}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    ///
    /// Error tokens are kept in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Tokenizes all source, failing on the first unrecognized character.
    ///
    /// # Errors
    /// Returns a lex error naming the character and its position.
    pub fn tokenize(source: &str) -> Result<Vec<Token>> {
        let tokens = Self::tokenize_all(source);
        let bad = tokens.iter().find_map(|t| match &t.kind {
            TokenKind::Error(message) => Some((message, t.span)),
            _ => None,
        });
        if let Some((message, span)) = bad {
            return Err(Error::lex(
                message.clone(),
                span.line,
                span.column,
                span.line_text(source).to_string(),
            ));
        }
        Ok(tokens)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Consumes a single punctuation character.
    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Scans an identifier. Interior and trailing spaces belong to it.
    fn scan_ident(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_ident_char) {
            self.advance();
        }
        TokenKind::Ident(self.source[start..self.position].to_string())
    }
}

/// Returns true if `c` is skipped between tokens.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns true if `c` can appear in an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ' ' | '/' | '-' | '\\' | '.')
}
