//! Engine crate: the async facade over the scoring strategies.
//!
//! This is the surface the presentation layer (CLI or any caller) talks to.

pub mod engine;

pub use engine::{EngineError, RecommendationEngine};
