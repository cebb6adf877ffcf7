//! trisolvr - Quadrature over triangles
//!
//! trisolvr integrates scalar and vector-valued functions over batches of
//! triangles embedded in any dimension. Fixed reference schemes are mapped
//! onto every triangle at once; an adaptive driver compares two schemes and
//! subdivides where they disagree.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      trisolvr                            │
//! │   (geometry, fixed-scheme and adaptive quadrature)      │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │          (tensors, runtimes, device clients)            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`integrate`] - Triangle geometry, quadrature schemes, fixed and adaptive integration
//!
//! # Logging
//!
//! Progress of adaptive integration is reported through the `log` facade at
//! `debug` level. Install any `log` backend to see it.
//!
//! # Example
//!
//! ```
//! use trisolvr::integrate::{QuadratureScheme, TriangleBatch, integrate, kahan_sum};
//!
//! let unit = TriangleBatch::single([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
//! let xy = integrate(
//!     |p| p.axis(0).iter().zip(p.axis(1)).map(|(x, y)| x * y).collect::<Vec<f64>>(),
//!     &unit,
//!     &QuadratureScheme::radon_7(),
//!     kahan_sum,
//! )
//! .unwrap();
//! assert!((xy.get(0, 0) - 1.0 / 24.0).abs() < 1e-15);
//! ```

pub mod integrate;

// Re-export main types for convenience
pub use integrate::{
    AdaptiveTriangleOptions, AdaptiveTriangleResult, AdaptiveTriangleTensorResult,
    IntegrateError, IntegrateResult, Points, QuadratureScheme, TriangleBatch,
    TriangleIntegrationAlgorithms, Values, adaptive_integrate,
};

// Re-export numr types that users will commonly need
pub use numr::error::{Error, Result};
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
