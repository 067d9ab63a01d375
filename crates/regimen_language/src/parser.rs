//! Parser for the Regimen DSL.
//!
//! Recursive descent over the token stream:
//!
//! ```text
//! Plan        := Definition*
//! Definition  := Ident Item
//! Item        := Choice | Sequence | Alias
//! Choice      := '{' Weight ('|' Weight)* '}'
//! Sequence    := '[' Item (',' Item)* ']'
//! Alias       := '(' Ident ')'
//! Weight      := Ident ':' Ident
//! ```
//!
//! No semantic checks happen here. Aliases need not name a definition and
//! weight values need not be numeric; the resolver deals with both.

use regimen_foundation::{Error, Result};

use crate::ast::{Definition, Item, Plan, Weight};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Sequences nested deeper than this are rejected.
pub const MAX_NESTING: usize = 256;

/// Parser for Regimen plan source.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
    /// Open sequences around the current position.
    nesting: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            source,
            nesting: 0,
        }
    }

    /// Parses a whole plan.
    ///
    /// # Errors
    /// Returns a lex or parse error for malformed input, and a
    /// "no definitions" error when the source declares nothing.
    pub fn parse_plan(&mut self) -> Result<Plan> {
        let mut definitions = Vec::new();

        while self.current.kind != TokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }

        if definitions.is_empty() {
            return Err(Error::no_definitions());
        }

        Ok(Plan::new(definitions))
    }

    /// Parses a single item and requires the input to end after it.
    ///
    /// # Errors
    /// Returns an error if the source is not exactly one item.
    pub fn parse_single_item(&mut self) -> Result<Item> {
        let item = self.parse_item()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of input"));
        }
        Ok(item)
    }

    /// Parses `Ident Item`.
    fn parse_definition(&mut self) -> Result<Definition> {
        let (name, start_span) = self.expect_ident("definition name")?;
        let item = self.parse_item()?;
        let span = start_span.to(item.span());
        Ok(Definition::new(name, item, span))
    }

    /// Parses a choice, sequence, or alias.
    fn parse_item(&mut self) -> Result<Item> {
        match self.current.kind {
            TokenKind::LBrace => self.parse_choice(),
            TokenKind::LBracket => self.parse_sequence(),
            TokenKind::LParen => self.parse_alias(),
            _ => Err(self.unexpected("'{', '[' or '('")),
        }
    }

    /// Parses a choice: `{ name : weight | ... }`.
    fn parse_choice(&mut self) -> Result<Item> {
        let start_span = self.current.span;
        self.expect(&TokenKind::LBrace)?;

        let mut weights = vec![self.parse_weight()?];
        while self.current.kind == TokenKind::Pipe {
            self.advance();
            weights.push(self.parse_weight()?);
        }

        let end_span = self.current.span;
        self.expect_closing(&TokenKind::RBrace, start_span, "choice")?;

        Ok(Item::Choice(weights, start_span.to(end_span)))
    }

    /// Parses a sequence: `[ item, ... ]`.
    fn parse_sequence(&mut self) -> Result<Item> {
        let start_span = self.current.span;
        if self.nesting >= MAX_NESTING {
            return Err(self.error_at(
                start_span,
                &format!("sequences nested deeper than {MAX_NESTING}"),
            ));
        }
        self.expect(&TokenKind::LBracket)?;
        self.nesting += 1;

        let mut items = vec![self.parse_item()?];
        while self.current.kind == TokenKind::Comma {
            self.advance();
            items.push(self.parse_item()?);
        }

        let end_span = self.current.span;
        self.expect_closing(&TokenKind::RBracket, start_span, "sequence")?;
        self.nesting -= 1;

        Ok(Item::Sequence(items, start_span.to(end_span)))
    }

    /// Parses an alias: `( name )`.
    fn parse_alias(&mut self) -> Result<Item> {
        let start_span = self.current.span;
        self.expect(&TokenKind::LParen)?;

        let (name, _) = self.expect_ident("alias name")?;

        let end_span = self.current.span;
        self.expect_closing(&TokenKind::RParen, start_span, "alias")?;

        Ok(Item::Alias(name, start_span.to(end_span)))
    }

    /// Parses `name : value` inside a choice.
    fn parse_weight(&mut self) -> Result<Weight> {
        let (name, start_span) = self.expect_ident("option name")?;
        self.expect(&TokenKind::Colon)?;
        let end_span = self.current.span;
        let (value, _) = self.expect_ident("weight")?;
        Ok(Weight::new(name, value, start_span.to(end_span)))
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Expects an identifier, returning its raw text and span.
    fn expect_ident(&mut self, what: &str) -> Result<(String, Span)> {
        if let TokenKind::Ident(text) = &self.current.kind {
            let text = text.clone();
            let span = self.current.span;
            self.advance();
            Ok((text, span))
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected.name()))
        }
    }

    /// Like [`Self::expect`], but reports end of input at the opening delimiter.
    fn expect_closing(&mut self, expected: &TokenKind, open: Span, construct: &str) -> Result<()> {
        if self.current.kind == TokenKind::Eof {
            return Err(self.error_at(open, &format!("unterminated {construct}")));
        }
        self.expect(expected)
    }

    /// Builds the error for a token that is not what the grammar needs.
    fn unexpected(&self, expected: &str) -> Error {
        match &self.current.kind {
            TokenKind::Error(message) => Error::lex(
                message.clone(),
                self.current.span.line,
                self.current.span.column,
                self.context_at(self.current.span),
            ),
            TokenKind::Eof => self.error(&format!("unexpected end of input, expected {expected}")),
            found => self.error(&format!("expected {expected}, found {}", found.name())),
        }
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a parse error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(message, span.line, span.column, self.context_at(span))
    }

    /// Gets the source line around a span for error messages.
    fn context_at(&self, span: Span) -> String {
        span.line_text(self.source).to_string()
    }
}

/// Parses plan source into a [`Plan`].
///
/// # Errors
/// Returns an error if the source cannot be parsed or declares nothing.
pub fn parse(source: &str) -> Result<Plan> {
    Parser::new(source).parse_plan()
}

/// Parses a single item such as `[ (lap), (rest) ]`.
///
/// # Errors
/// Returns an error if the source is not exactly one item.
pub fn parse_item(source: &str) -> Result<Item> {
    Parser::new(source).parse_single_item()
}
