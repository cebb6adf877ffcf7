use numr::error::Result;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

use crate::integrate::error::IntegrateResult;
use crate::integrate::triangle::{AdaptiveTriangleOptions, QuadratureScheme, SumFn};

use super::AdaptiveTriangleTensorResult;

/// Trait for triangle integration that works across all Runtime backends.
///
/// Triangles are passed as a `[n, 3, dim]` tensor (or `[3, dim]` for one
/// triangle). Integrands receive all mapped points at once as a `[dim, npoints]`
/// tensor and return `[npoints]`, `[c, npoints]`, or `[1]` to broadcast.
///
/// # Example
///
/// ```ignore
/// use trisolvr::integrate::{QuadratureScheme, TriangleIntegrationAlgorithms, kahan_sum};
/// use numr::runtime::cpu::{CpuClient, CpuDevice};
///
/// let device = CpuDevice::new();
/// let client = CpuClient::new(device.clone());
///
/// let tri = Tensor::from_slice(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0], &[3, 2], &device);
/// let area = client.triangle_quad(
///     |x| Ok(Tensor::from_slice(&[1.0], &[1], &device)),
///     &tri,
///     &QuadratureScheme::centroid(),
///     kahan_sum,
/// )?;
/// ```
pub trait TriangleIntegrationAlgorithms<R: Runtime> {
    /// Fixed-scheme quadrature over every triangle of a batch.
    ///
    /// # Arguments
    /// * `f` - Integrand over a `[dim, npoints]` tensor of Cartesian points
    /// * `triangles` - `[n, 3, dim]` or `[3, dim]` vertex tensor
    /// * `scheme` - Reference-triangle quadrature rule
    /// * `sum_fn` - Reduction over the quadrature axis
    ///
    /// # Returns
    /// * `[n]` for a 1-D integrand
    /// * `[c, n]` for a `[c, npoints]` integrand
    fn triangle_quad<F>(
        &self,
        f: F,
        triangles: &Tensor<R>,
        scheme: &QuadratureScheme,
        sum_fn: SumFn,
    ) -> IntegrateResult<Tensor<R>>
    where
        F: Fn(&Tensor<R>) -> Result<Tensor<R>>;

    /// Adaptive quadrature by triforce subdivision.
    ///
    /// See [`adaptive_integrate`](crate::integrate::adaptive_integrate) for
    /// the acceptance rule and the failure modes.
    ///
    /// # Arguments
    /// * `f` - Integrand over a `[dim, npoints]` tensor of Cartesian points
    /// * `triangles` - `[n, 3, dim]` or `[3, dim]` vertex tensor
    /// * `eps` - Absolute tolerance for the whole batch
    /// * `options` - Schemes, area floor and summation strategy
    fn adaptive_triangle_quad<F>(
        &self,
        f: F,
        triangles: &Tensor<R>,
        eps: f64,
        options: &AdaptiveTriangleOptions,
    ) -> IntegrateResult<AdaptiveTriangleTensorResult<R>>
    where
        F: Fn(&Tensor<R>) -> Result<Tensor<R>>;
}
