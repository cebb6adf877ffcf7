//! Fixed-scheme integration over a batch of triangles.

use log::trace;

use crate::integrate::error::{IntegrateError, IntegrateResult};

use super::geometry::{TriangleBatch, area};
use super::scheme::QuadratureScheme;
use super::summation::SumFn;
use super::values::{IntegrandOutput, Points, Values};

/// Integrate `f` over every triangle of the batch with one quadrature scheme.
///
/// The scheme is mapped onto all triangles and `f` is evaluated once on the
/// whole set of mapped points. Each value is scaled by its weight and by the
/// triangle's area, then `sum_fn` reduces over the scheme's points.
///
/// # Arguments
///
/// * `f` - Integrand; receives all points at once, returns one value per point
///   (per component), or a single value to broadcast
/// * `triangles` - Integration domains
/// * `scheme` - Reference-triangle quadrature rule
/// * `sum_fn` - Reduction used over the quadrature axis
///
/// # Returns
///
/// [`Values`] of shape `components × triangles.len()`.
///
/// # Example
///
/// ```
/// use trisolvr::integrate::{QuadratureScheme, TriangleBatch, integrate, kahan_sum};
///
/// let unit = TriangleBatch::single([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
/// let result = integrate(
///     |p| p.axis(0).iter().zip(p.axis(1)).map(|(x, y)| x + y).collect::<Vec<f64>>(),
///     &unit,
///     &QuadratureScheme::centroid(),
///     kahan_sum,
/// )
/// .unwrap();
/// assert!((result.get(0, 0) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn integrate<F, V>(
    f: F,
    triangles: &TriangleBatch,
    scheme: &QuadratureScheme,
    sum_fn: SumFn,
) -> IntegrateResult<Values>
where
    F: Fn(&Points) -> V,
    V: IntegrandOutput,
{
    if triangles.is_empty() {
        return Err(IntegrateError::InvalidInput {
            context: "integrate: empty triangle batch".to_string(),
        });
    }

    let nq = scheme.len();
    let points = scheme.map_points(triangles);
    trace!(
        "integrate: {} triangles x {} points ({})",
        triangles.len(),
        nq,
        scheme.name()
    );

    let values = f(&points)
        .into_values()?
        .broadcast_to(points.len(), "integrate")?;

    let areas = area(triangles);
    let weights = scheme.weights();
    let mut result = Values::zeros(values.components(), triangles.len());
    let mut terms = vec![0.0; nq];

    for c in 0..values.components() {
        let component = values.component(c);
        let out = result.component_mut(c);
        for (t, (&a, chunk)) in areas.iter().zip(component.chunks_exact(nq)).enumerate() {
            for ((term, &w), &v) in terms.iter_mut().zip(weights).zip(chunk) {
                *term = w * v * a;
            }
            out[t] = sum_fn(&terms);
        }
    }

    Ok(result)
}
