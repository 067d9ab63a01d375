//! Plan loading, output formats, logging, and the CLI for Regimen.
//!
//! This crate provides:
//! - [`Session`] - A parsed plan plus where it came from
//! - [`RunOptions`] - Root, seed, depth, indentation, count, and format
//! - [`Realization`] - Resolved events ready to be written as text or JSON
//! - [`logging`] - Subscriber setup for the `regimen` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod logging;
pub mod session;

pub use error::{Result, RuntimeError};
pub use session::{
    DEFAULT_PLAN_PATH, EXAMPLE_PLAN, OutputFormat, PlanSource, Realization, RunOptions, Session,
};
