//! Errors raised while loading, resolving, or writing a plan.

use std::io;
use std::path::PathBuf;

use regimen_foundation::ErrorKind;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The plan file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The plan failed to parse or resolve.
    #[error(transparent)]
    Plan(#[from] regimen_foundation::Error),

    /// Output could not be written.
    #[error("could not write output: {0}")]
    Write(#[from] io::Error),

    /// Output could not be encoded as JSON.
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl RuntimeError {
    /// Returns true if the plan text itself is malformed.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Plan(e) if e.is_syntax())
    }

    /// Formats the error for a terminal, including the offending source line
    /// for syntax errors and the chain of definitions being expanded.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let Self::Plan(error) = self else {
            return out;
        };

        match &error.kind {
            ErrorKind::Lex {
                column, context, ..
            }
            | ErrorKind::Parse {
                column, context, ..
            } if !context.is_empty() => {
                let pad = " ".repeat(column.saturating_sub(1) as usize);
                out.push_str(&format!("\n  | {context}\n  | {pad}^"));
            }
            _ => {}
        }

        if let Some(context) = &error.context {
            let context = context.to_string();
            let context = context.trim_end();
            if !context.is_empty() {
                if !context.starts_with('\n') {
                    out.push('\n');
                }
                out.push_str(context);
            }
        }

        out
    }
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
