//! Regimen - Weighted-random activity plans
//!
//! This crate re-exports all layers of the Regimen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: regimen_runtime    — Plan loading, output formats, logging, CLI
//! Layer 2: regimen_engine     — Weighted sampling, resolution, rendering
//! Layer 1: regimen_language   — Lexer, parser, AST
//! Layer 0: regimen_foundation — Error types
//! ```

pub use regimen_engine as engine;
pub use regimen_foundation as foundation;
pub use regimen_language as language;
pub use regimen_runtime as runtime;
