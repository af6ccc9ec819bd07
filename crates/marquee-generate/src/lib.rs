//! Sample-data generation for Marquee.
//!
//! Wraps the core tables in a generator registry, integrates them with the
//! `fake` crate, and produces seeded CSV datasets.

pub mod engine;
pub mod errors;
pub mod faker;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GeneratedTable, GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
