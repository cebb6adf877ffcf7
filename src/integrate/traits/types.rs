//! Types for tensor-based triangle integration.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Result of adaptive triangle quadrature on tensors.
#[derive(Debug, Clone)]
pub struct AdaptiveTriangleTensorResult<R: Runtime> {
    /// Integral over the batch: 0-D for a 1-D integrand, `[c]` for `[c, n]` output
    pub integral: Tensor<R>,
    /// Summed error estimate, same shape as `integral`
    pub error: Tensor<R>,
    /// Number of evaluation rounds
    pub rounds: usize,
    /// Number of triangles accepted across all rounds
    pub accepted: usize,
    /// Number of integrand evaluations (points)
    pub neval: usize,
}
