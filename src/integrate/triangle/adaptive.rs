//! Adaptive triangle quadrature by triforce subdivision.
//!
//! Every round integrates the active triangles with two schemes of different
//! degree. The difference is the error estimate. Triangles whose estimate is
//! within their share of the tolerance are accepted; the rest are split into
//! four and tried again.

use log::{debug, warn};

use crate::integrate::error::{IntegrateError, IntegrateResult};

use super::fixed::integrate;
use super::geometry::{TriangleBatch, area, triforce};
use super::scheme::QuadratureScheme;
use super::summation::{SumFn, kahan_sum};
use super::values::{IntegrandOutput, Points};

/// Options for adaptive triangle quadrature.
#[derive(Debug, Clone)]
pub struct AdaptiveTriangleOptions {
    /// Smallest area a subdivided triangle may have.
    ///
    /// `None` means `total_area · 0.25^10`, i.e. ten levels of subdivision.
    /// With `Some(0.0)` and an unreachable tolerance the loop only stops once
    /// areas underflow.
    pub min_area: Option<f64>,
    /// Scheme whose values are accumulated (default: degree 5)
    pub scheme_lo: QuadratureScheme,
    /// Reference scheme for the error estimate (default: degree 10)
    pub scheme_hi: QuadratureScheme,
    /// Reduction used everywhere a sum is taken (default: [`kahan_sum`])
    pub sum_fn: SumFn,
}

impl Default for AdaptiveTriangleOptions {
    fn default() -> Self {
        let (scheme_lo, scheme_hi) = QuadratureScheme::default_pair();
        Self {
            min_area: None,
            scheme_lo,
            scheme_hi,
            sum_fn: kahan_sum,
        }
    }
}

/// Result of adaptive triangle quadrature.
#[derive(Debug, Clone)]
pub struct AdaptiveTriangleResult {
    /// Integral over the whole batch, one entry per integrand component
    pub integral: Vec<f64>,
    /// Summed error estimate of all accepted triangles, per component
    pub error: Vec<f64>,
    /// Number of evaluation rounds (1 means no subdivision)
    pub rounds: usize,
    /// Number of triangles accepted across all rounds
    pub accepted: usize,
    /// Number of integrand evaluations (points, not calls)
    pub neval: usize,
}

/// Adaptive quadrature over a batch of triangles.
///
/// A triangle is accepted once, for every component,
/// `|lo - hi| < eps · area / total_area`, where `total_area` is the area of
/// the input batch. Accepted triangles contribute their `scheme_lo` value and
/// their error estimate; rejected ones are split by [`triforce`].
///
/// # Arguments
///
/// * `f` - Integrand, evaluated on whole batches of points
/// * `triangles` - Integration domain; every triangle must have positive area
/// * `eps` - Absolute tolerance for the whole batch (`+∞` disables refinement)
/// * `options` - Schemes, area floor and summation strategy
///
/// # Errors
///
/// * [`IntegrateError::DegenerateTriangle`] if an input triangle has zero area
/// * [`IntegrateError::InvalidInput`] if an input area or their sum overflows
/// * [`IntegrateError::MinimumAreaViolated`] if a split would produce a
///   triangle no larger than the area floor; no partial result is returned
/// * [`IntegrateError::ShapeMismatch`] if the integrand output does not fit
///
/// # Example
///
/// ```
/// use trisolvr::integrate::{AdaptiveTriangleOptions, Points, TriangleBatch, adaptive_integrate};
///
/// let unit = TriangleBatch::single([[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
/// let result = adaptive_integrate(
///     |p: &Points| -> Vec<f64> {
///         p.axis(0).iter().zip(p.axis(1)).map(|(x, y)| (x + y).exp()).collect()
///     },
///     &unit,
///     1e-10,
///     &AdaptiveTriangleOptions::default(),
/// )
/// .unwrap();
/// assert!((result.integral[0] - 1.0).abs() < 1e-9);
/// ```
pub fn adaptive_integrate<F, V>(
    f: F,
    triangles: &TriangleBatch,
    eps: f64,
    options: &AdaptiveTriangleOptions,
) -> IntegrateResult<AdaptiveTriangleResult>
where
    F: Fn(&Points) -> V,
    V: IntegrandOutput,
{
    if eps.is_nan() || eps <= 0.0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "eps".to_string(),
            message: format!("must be positive, got {}", eps),
        });
    }
    if triangles.is_empty() {
        return Err(IntegrateError::InvalidInput {
            context: "adaptive_integrate: empty triangle batch".to_string(),
        });
    }

    let sum_fn = options.sum_fn;
    let mut areas = area(triangles);
    if let Some((index, &a)) = areas.iter().enumerate().find(|(_, a)| **a <= 0.0) {
        return Err(IntegrateError::DegenerateTriangle {
            index,
            area: a,
            context: "adaptive_integrate".to_string(),
        });
    }
    if let Some(index) = areas.iter().position(|a| !a.is_finite()) {
        return Err(IntegrateError::InvalidInput {
            context: format!("adaptive_integrate: area of triangle {} overflows", index),
        });
    }
    let total_area = sum_fn(&areas);
    if !total_area.is_finite() {
        return Err(IntegrateError::InvalidInput {
            context: format!("adaptive_integrate: total area {} is not finite", total_area),
        });
    }

    let min_area = match options.min_area {
        Some(m) if !m.is_finite() || m < 0.0 => {
            return Err(IntegrateError::InvalidParameter {
                parameter: "min_area".to_string(),
                message: format!("must be finite and non-negative, got {}", m),
            });
        }
        Some(m) => {
            if m == 0.0 {
                warn!("adaptive_integrate: min_area = 0, refinement is bounded only by underflow");
            }
            m
        }
        None => total_area * 0.25_f64.powi(10),
    };

    let mut active = triangles.clone();
    let mut integral: Vec<f64> = Vec::new();
    let mut error: Vec<f64> = Vec::new();
    let mut rounds = 0;
    let mut accepted = 0;
    let mut neval = 0;

    loop {
        rounds += 1;

        let lo = integrate(&f, &active, &options.scheme_lo, sum_fn)?;
        let hi = integrate(&f, &active, &options.scheme_hi, sum_fn)?;
        neval += active.len() * (options.scheme_lo.len() + options.scheme_hi.len());

        let components = lo.components();
        if integral.is_empty() {
            integral = vec![0.0; components];
            error = vec![0.0; components];
        }
        for got in [lo.components(), hi.components()] {
            if got != integral.len() {
                return Err(IntegrateError::ShapeMismatch {
                    expected: format!("{} components", integral.len()),
                    actual: format!("{} components", got),
                    context: "adaptive_integrate: integrand changed its component count"
                        .to_string(),
                });
            }
        }

        // per-component |lo - hi|, laid out like `lo`
        let estimates: Vec<Vec<f64>> = (0..components)
            .map(|c| {
                lo.component(c)
                    .iter()
                    .zip(hi.component(c))
                    .map(|(a, b)| (a - b).abs())
                    .collect()
            })
            .collect();

        let is_good: Vec<bool> = areas
            .iter()
            .enumerate()
            .map(|(t, &a)| {
                let tol = eps * a / total_area;
                estimates.iter().all(|e| e[t] < tol)
            })
            .collect();

        let n_good = is_good.iter().filter(|g| **g).count();
        for c in 0..components {
            let good_values: Vec<f64> = lo
                .component(c)
                .iter()
                .zip(&is_good)
                .filter(|(_, g)| **g)
                .map(|(v, _)| *v)
                .collect();
            let good_errors: Vec<f64> = estimates[c]
                .iter()
                .zip(&is_good)
                .filter(|(_, g)| **g)
                .map(|(e, _)| *e)
                .collect();
            integral[c] += sum_fn(&good_values);
            error[c] += sum_fn(&good_errors);
        }
        accepted += n_good;

        let n_bad = active.len() - n_good;
        debug!(
            "adaptive_integrate round {}: {} active, {} accepted, {} split",
            rounds,
            active.len(),
            n_good,
            n_bad
        );
        if n_bad == 0 {
            break;
        }

        let is_bad: Vec<bool> = is_good.iter().map(|g| !g).collect();
        active = triforce(&active.select(&is_bad));
        areas = area(&active);

        if let Some(&smallest) = areas.iter().find(|&&a| a.is_nan() || a <= min_area) {
            return Err(IntegrateError::MinimumAreaViolated {
                area: smallest,
                min_area,
                round: rounds,
                context: "adaptive_integrate".to_string(),
            });
        }
    }

    Ok(AdaptiveTriangleResult {
        integral,
        error,
        rounds,
        accepted,
        neval,
    })
}
