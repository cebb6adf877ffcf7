//! Generic implementations of integration algorithms.
//!
//! All implementations are generic over `R: Runtime` for multi-backend support.

mod triangle;

pub use triangle::{adaptive_triangle_quad_impl, triangle_quad_impl};
