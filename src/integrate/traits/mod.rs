//! Trait definitions and types for integration algorithms.

mod algorithms;
mod types;

pub use algorithms::TriangleIntegrationAlgorithms;
pub use types::AdaptiveTriangleTensorResult;
