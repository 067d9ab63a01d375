//! Text rendering of resolved plans.
//!
//! Each event becomes one line: `indent_unit` repeated `depth` times,
//! followed by the event text.

use std::io::{self, Write};

use crate::resolver::RenderEvent;

/// Default indentation per depth level.
pub const DEFAULT_INDENT: &str = "  ";

/// Turns render events into indented lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    /// Indentation emitted once per depth level.
    indent_unit: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT.to_string(),
        }
    }
}

impl Renderer {
    /// Creates a renderer with two-space indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent_unit: impl Into<String>) -> Self {
        self.indent_unit = indent_unit.into();
        self
    }

    /// Returns the indentation unit.
    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Renders a single event without a trailing newline.
    #[must_use]
    pub fn render_line(&self, event: &RenderEvent) -> String {
        format!("{}{}", self.indent_unit.repeat(event.depth), event.text)
    }

    /// Renders all events, one per line, each ending in a newline.
    #[must_use]
    pub fn render(&self, events: &[RenderEvent]) -> String {
        let mut out = String::new();
        for event in events {
            out.push_str(&self.render_line(event));
            out.push('\n');
        }
        out
    }

    /// Writes all events to `out`, one per line.
    ///
    /// # Errors
    /// Returns any I/O error from the writer.
    pub fn write<W: Write + ?Sized>(&self, events: &[RenderEvent], out: &mut W) -> io::Result<()> {
        for event in events {
            writeln!(out, "{}", self.render_line(event))?;
        }
        Ok(())
    }
}
