// src/processing/mod.rs
pub mod engine;

// Re-export main components
pub use engine::{ComputeRequest, ComputeResult, IndexEngine, SkippedIndex};
