//! Core error types for Regimen.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with optional context
//! - [`ErrorKind`] - Lexing, parsing, sampling, and resolution failures
//! - [`ErrorContext`] - Source name, position, and definition stack

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
