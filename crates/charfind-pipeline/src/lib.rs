//! Debounced, deduplicated, switch-latest search pipeline.

pub mod pipeline;

pub use pipeline::SearchPipeline;
