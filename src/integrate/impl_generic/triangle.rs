//! Tensor-based triangle quadrature.
//!
//! Thin wrappers over the `f64` core: triangles and integrand values cross the
//! device boundary once per integrand call.

use std::cell::Cell;

use numr::error::Result;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

use crate::integrate::error::{IntegrateError, IntegrateResult};
use crate::integrate::traits::AdaptiveTriangleTensorResult;
use crate::integrate::triangle::{
    AdaptiveTriangleOptions, Points, QuadratureScheme, SumFn, TriangleBatch, Values,
    adaptive_integrate, integrate,
};

/// Fixed-scheme quadrature over a `[n, 3, dim]` (or `[3, dim]`) triangle tensor.
///
/// Returns `[n]` for a 1-D integrand and `[c, n]` for a `[c, npoints]` one.
pub fn triangle_quad_impl<R, C, F>(
    client: &C,
    f: F,
    triangles: &Tensor<R>,
    scheme: &QuadratureScheme,
    sum_fn: SumFn,
) -> IntegrateResult<Tensor<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
    F: Fn(&Tensor<R>) -> Result<Tensor<R>>,
{
    let batch = triangles_from_tensor(triangles)?;
    let rank = Cell::new(1);
    let values = integrate(
        tensor_integrand::<R, C, F>(client, &f, &rank),
        &batch,
        scheme,
        sum_fn,
    )?;

    let shape = if rank.get() == 1 {
        vec![values.len()]
    } else {
        vec![values.components(), values.len()]
    };
    Ok(Tensor::<R>::from_slice(
        values.as_slice(),
        &shape,
        client.device(),
    ))
}

/// Adaptive triforce quadrature over a triangle tensor.
///
/// `integral` and `error` are 0-D for a 1-D integrand and `[c]` otherwise.
pub fn adaptive_triangle_quad_impl<R, C, F>(
    client: &C,
    f: F,
    triangles: &Tensor<R>,
    eps: f64,
    options: &AdaptiveTriangleOptions,
) -> IntegrateResult<AdaptiveTriangleTensorResult<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
    F: Fn(&Tensor<R>) -> Result<Tensor<R>>,
{
    let batch = triangles_from_tensor(triangles)?;
    let rank = Cell::new(1);
    let result = adaptive_integrate(
        tensor_integrand::<R, C, F>(client, &f, &rank),
        &batch,
        eps,
        options,
    )?;

    let shape = if rank.get() == 1 {
        vec![]
    } else {
        vec![result.integral.len()]
    };
    Ok(AdaptiveTriangleTensorResult {
        integral: Tensor::<R>::from_slice(&result.integral, &shape, client.device()),
        error: Tensor::<R>::from_slice(&result.error, &shape, client.device()),
        rounds: result.rounds,
        accepted: result.accepted,
        neval: result.neval,
    })
}

fn triangles_from_tensor<R: Runtime>(triangles: &Tensor<R>) -> IntegrateResult<TriangleBatch> {
    let shape: &[usize] = triangles.shape();
    let dim = match shape {
        [3, dim] | [_, 3, dim] => *dim,
        _ => {
            return Err(IntegrateError::InvalidInput {
                context: format!(
                    "triangles must have shape [n, 3, dim] or [3, dim], got {:?}",
                    shape
                ),
            });
        }
    };
    let data: Vec<f64> = triangles.to_vec();
    TriangleBatch::new(dim, data)
}

/// Adapt a tensor integrand to the core's `Points -> Values` form.
///
/// `rank` records the rank of the last output so results can mirror it.
fn tensor_integrand<'a, R, C, F>(
    client: &'a C,
    f: &'a F,
    rank: &'a Cell<usize>,
) -> impl Fn(&Points) -> IntegrateResult<Values>
where
    R: Runtime,
    C: RuntimeClient<R>,
    F: Fn(&Tensor<R>) -> Result<Tensor<R>>,
{
    move |points: &Points| {
        let x = Tensor::<R>::from_slice(
            points.as_slice(),
            &[points.dim(), points.len()],
            client.device(),
        );
        let y = f(&x)?;
        let data: Vec<f64> = y.to_vec();
        let shape: &[usize] = y.shape();
        match shape {
            [_] => {
                rank.set(1);
                Ok(Values::scalar(data))
            }
            [components, _] => {
                rank.set(2);
                Values::new(*components, data)
            }
            _ => Err(IntegrateError::ShapeMismatch {
                expected: "[npoints] or [c, npoints]".to_string(),
                actual: format!("{:?}", shape),
                context: "triangle integrand".to_string(),
            }),
        }
    }
}
