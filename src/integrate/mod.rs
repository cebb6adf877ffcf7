//! Numerical integration over triangles.
//!
//! This module provides:
//! - **Geometry**: triangle batches, areas, triforce subdivision
//! - **Fixed-scheme quadrature**: one reference rule mapped onto many triangles
//! - **Adaptive quadrature**: two rules of different degree plus subdivision
//!   until every triangle meets its share of the tolerance
//!
//! # Architecture
//!
//! The algorithms live in [`triangle`] and work on plain `f64` buffers with
//! an explicit batch axis. The [`TriangleIntegrationAlgorithms`] trait exposes
//! the same algorithms on `Tensor<R>` for any numr runtime.
//!
//! # Example
//!
//! ```
//! use trisolvr::integrate::{AdaptiveTriangleOptions, Points, TriangleBatch, adaptive_integrate};
//!
//! let tri = TriangleBatch::single([[-0.5, 0.0], [0.5, 0.0], [0.0, 0.5 * 3.0_f64.sqrt()]]).unwrap();
//! let result = adaptive_integrate(
//!     |p: &Points| vec![1.0; p.len()],
//!     &tri,
//!     1e-10,
//!     &AdaptiveTriangleOptions::default(),
//! )
//! .unwrap();
//! assert!((result.integral[0] - 3.0_f64.sqrt() / 4.0).abs() < 1e-14);
//! assert_eq!(result.rounds, 1);
//! ```

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod traits;
pub mod triangle;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export the f64 core
pub use triangle::{
    AdaptiveTriangleOptions, AdaptiveTriangleResult, IntegrandOutput, Points, QuadratureScheme,
    SumFn, TriangleBatch, Values, adaptive_integrate, area, integrate, kahan_sum, naive_sum,
    pairwise_sum, triangle_area, triforce,
};

// Re-export tensor-based API
pub use impl_generic::{adaptive_triangle_quad_impl, triangle_quad_impl};
pub use traits::{AdaptiveTriangleTensorResult, TriangleIntegrationAlgorithms};
