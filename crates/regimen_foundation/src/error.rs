//! Error types for the Regimen system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Regimen operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the source (usually a file path) the failing plan came from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Pushes a definition frame onto the context stack.
    ///
    /// Frames are pushed innermost first while an error unwinds through
    /// the resolver.
    #[must_use]
    pub fn in_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a lexer error for an unrecognized character.
    ///
    /// The position is also recorded in the context, so it is printed next
    /// to the source name once one is attached.
    #[must_use]
    pub fn lex(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Lex {
            message: message.into(),
            line,
            column,
            context,
        })
        .with_context(ErrorContext::new().with_position(line, column))
    }

    /// Creates a grammar error.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
            context,
        })
        .with_context(ErrorContext::new().with_position(line, column))
    }

    /// Creates the error for a syntactically valid plan without definitions.
    #[must_use]
    pub fn no_definitions() -> Self {
        Self::new(ErrorKind::NoDefinitions)
    }

    /// Creates an invalid weight literal error.
    #[must_use]
    pub fn invalid_weight(literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWeight(literal.into()))
    }

    /// Creates the error for a choice whose weights sum to zero.
    #[must_use]
    pub fn no_positive_weight() -> Self {
        Self::new(ErrorKind::NoPositiveWeight)
    }

    /// Creates a depth limit exceeded error.
    #[must_use]
    pub fn depth_exceeded(limit: usize, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DepthExceeded {
            limit,
            name: name.into(),
        })
    }

    /// Creates an unknown root error.
    #[must_use]
    pub fn unknown_root(root: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownRoot(root.into()))
    }

    /// Returns true if this error was raised before resolution started.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Lex { .. } | ErrorKind::Parse { .. } | ErrorKind::NoDefinitions
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A character that belongs to no token class.
    #[error("lex error at {line}:{column}: {message}")]
    Lex {
        /// Description of the offending input.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// Grammar violation, including end of input inside an open construct.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// The plan parsed but declares nothing.
    #[error("no definitions")]
    NoDefinitions,

    /// Weight literal is not a finite, non-negative number.
    #[error("invalid number: {0}")]
    InvalidWeight(String),

    /// Every weight in a choice is zero.
    #[error("no positive weight to sample from")]
    NoPositiveWeight,

    /// Reference chain grew deeper than the configured limit.
    #[error("max depth ({limit}) exceeded while expanding {name}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
        /// The definition that would have crossed the limit.
        name: String,
    },

    /// Requested root matches no definition.
    #[error("unknown root definition: {0}")]
    UnknownRoot(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or other input name.
    pub source: Option<String>,
    /// Line number in source (1-indexed).
    pub line: Option<u32>,
    /// Column number in source (1-indexed).
    pub column: Option<u32>,
    /// Definitions being expanded, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias using the Regimen error.
pub type Result<T> = std::result::Result<T, Error>;
