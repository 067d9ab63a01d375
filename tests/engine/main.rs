//! Integration tests for Layer 2: Engine
//!
//! Tests for weighted sampling, resolution, and rendering.

mod properties;
mod sampler;
