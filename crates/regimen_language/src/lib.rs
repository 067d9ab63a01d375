//! Lexer, parser, and plan AST for the Regimen DSL.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of plan source
//! - [`Parser`] - Parsing tokens into a [`Plan`]
//! - [`Plan`], [`Definition`], [`Item`], [`Weight`] - The plan AST
//!
//! ```text
//! workout { run : 2 | swim : 1 }
//! run     [ (warmup), (intervals), (cooldown) ]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Definition, Item, Plan, Weight};
pub use lexer::Lexer;
pub use parser::{MAX_NESTING, Parser, parse, parse_item};
pub use span::Span;
pub use token::{Token, TokenKind};
