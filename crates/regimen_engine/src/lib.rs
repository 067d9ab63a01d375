//! Weighted sampling, plan resolution, and rendering for Regimen.
//!
//! This crate provides:
//! - [`WeightedChoice`] - Ordered weighted random selection
//! - [`Resolver`] - The recursive walk that turns a [`Plan`] into [`RenderEvent`]s
//! - [`Renderer`] - Indented text output
//! - [`rng`] - Seeded and entropy-backed generators
//!
//! [`Plan`]: regimen_language::Plan

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod resolver;
pub mod rng;
pub mod sampler;

pub use config::{DEFAULT_MAX_DEPTH, ResolverConfig};
pub use render::{DEFAULT_INDENT, Renderer};
pub use resolver::{RenderEvent, Resolver, Root, resolve};
pub use rng::PlanRng;
pub use sampler::{WeightedChoice, parse_weight};
