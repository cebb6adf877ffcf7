//! Quadrature over triangles.
//!
//! Plain `f64` implementations; the tensor front end in
//! [`TriangleIntegrationAlgorithms`](crate::integrate::TriangleIntegrationAlgorithms)
//! wraps these.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`integrate`] | Smooth integrands, known degree | Exact up to the scheme's degree |
//! | [`adaptive_integrate`] | General integrands | Refines to the requested tolerance |
//!
//! Both evaluate the integrand on whole batches of points; the integrand sees
//! a [`Points`] value, never a single coordinate.

mod adaptive;
mod fixed;
mod gauss;
mod geometry;
mod scheme;
mod summation;
mod values;

pub use adaptive::{AdaptiveTriangleOptions, AdaptiveTriangleResult, adaptive_integrate};
pub use fixed::integrate;
pub use geometry::{TriangleBatch, area, triangle_area, triforce};
pub use scheme::QuadratureScheme;
pub use summation::{SumFn, kahan_sum, naive_sum, pairwise_sum};
pub use values::{IntegrandOutput, Points, Values};
