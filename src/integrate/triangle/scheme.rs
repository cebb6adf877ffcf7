//! Quadrature schemes on the reference triangle.
//!
//! A scheme is a list of barycentric points with normalized weights. Weights
//! sum to one, so applying a scheme to a triangle and multiplying by the
//! triangle's area approximates the integral.

use crate::integrate::error::{IntegrateError, IntegrateResult};

use super::gauss::gauss_legendre_unit;
use super::geometry::TriangleBatch;
use super::values::Points;

const BARYCENTRIC_TOL: f64 = 1e-12;
const WEIGHT_SUM_TOL: f64 = 1e-10;

/// A quadrature rule on the reference triangle.
///
/// Points are barycentric `[λ0, λ1, λ2]`; point `i` pairs with weight `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureScheme {
    name: String,
    degree: usize,
    points: Vec<[f64; 3]>,
    weights: Vec<f64>,
}

impl QuadratureScheme {
    /// Create a scheme from barycentric points and weights.
    ///
    /// Fails if the lists are empty or differ in length, if a point lies
    /// outside the reference triangle, or if the weights do not sum to 1.
    pub fn new(
        name: impl Into<String>,
        degree: usize,
        points: Vec<[f64; 3]>,
        weights: Vec<f64>,
    ) -> IntegrateResult<Self> {
        let name = name.into();
        if points.is_empty() {
            return Err(IntegrateError::InvalidParameter {
                parameter: "points".to_string(),
                message: format!("scheme '{}' has no points", name),
            });
        }
        if points.len() != weights.len() {
            return Err(IntegrateError::ShapeMismatch {
                expected: format!("{} weights", points.len()),
                actual: format!("{} weights", weights.len()),
                context: format!("QuadratureScheme '{}'", name),
            });
        }
        for (i, p) in points.iter().enumerate() {
            let sum = p[0] + p[1] + p[2];
            if (sum - 1.0).abs() > BARYCENTRIC_TOL || p.iter().any(|&l| l < -BARYCENTRIC_TOL) {
                return Err(IntegrateError::InvalidParameter {
                    parameter: "points".to_string(),
                    message: format!(
                        "point {} of scheme '{}' is not inside the reference triangle: {:?}",
                        i, name, p
                    ),
                });
            }
        }
        let total: f64 = weights.iter().sum();
        if total.is_nan() || (total - 1.0).abs() > WEIGHT_SUM_TOL {
            return Err(IntegrateError::InvalidParameter {
                parameter: "weights".to_string(),
                message: format!("weights of scheme '{}' sum to {}, not 1", name, total),
            });
        }

        Ok(Self {
            name,
            degree,
            points,
            weights,
        })
    }

    /// Create a scheme from Cartesian points `(u, v)` on the reference
    /// triangle `(0, 0), (1, 0), (0, 1)`.
    pub fn from_cartesian(
        name: impl Into<String>,
        degree: usize,
        points: &[[f64; 2]],
        weights: Vec<f64>,
    ) -> IntegrateResult<Self> {
        let barycentric = points
            .iter()
            .map(|&[u, v]| [1.0 - u - v, u, v])
            .collect();
        Self::new(name, degree, barycentric, weights)
    }

    /// One point at the centroid. Degree 1.
    pub fn centroid() -> Self {
        Self::fully_symmetric("centroid", 1, Some(1.0), &[])
    }

    /// The three vertices, equal weights. Degree 1.
    pub fn vertex() -> Self {
        Self::fully_symmetric("vertex", 1, None, &[(0.0, 1.0 / 3.0)])
    }

    /// Strang-Fix three-point rule. Degree 2.
    pub fn strang_fix_3() -> Self {
        Self::fully_symmetric("strang_fix_3", 2, None, &[(1.0 / 6.0, 1.0 / 3.0)])
    }

    /// Radon's seven-point rule. Degree 5.
    pub fn radon_7() -> Self {
        let s15 = 15.0_f64.sqrt();
        let a1 = (6.0 - s15) / 21.0;
        let a2 = (6.0 + s15) / 21.0;
        let w1 = (155.0 - s15) / 1200.0;
        let w2 = (155.0 + s15) / 1200.0;
        Self::fully_symmetric("radon_7", 5, Some(0.225), &[(a1, w1), (a2, w2)])
    }

    /// Collapsed Gauss-Legendre product rule with `n × n` points. Degree `2n - 2`.
    ///
    /// The unit square is mapped onto the triangle by `u = s`, `v = t (1 - s)`;
    /// the Jacobian `1 - s` is folded into the weights.
    pub fn conical_product(n: usize) -> IntegrateResult<Self> {
        if n == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "n".to_string(),
                message: "need at least 1 point per direction".to_string(),
            });
        }
        Ok(Self::build_conical(n))
    }

    /// The (degree 5, degree 10) pair adaptive integration uses by default.
    pub fn default_pair() -> (Self, Self) {
        (Self::radon_7(), Self::build_conical(6))
    }

    fn build_conical(n: usize) -> Self {
        let (nodes, weights) = gauss_legendre_unit(n);
        let mut points = Vec::with_capacity(n * n);
        let mut scheme_weights = Vec::with_capacity(n * n);
        for (&s, &ws) in nodes.iter().zip(&weights) {
            for (&t, &wt) in nodes.iter().zip(&weights) {
                let u = s;
                let v = t * (1.0 - s);
                points.push([1.0 - u - v, u, v]);
                // reference area is 1/2
                scheme_weights.push(2.0 * ws * wt * (1.0 - s));
            }
        }
        Self {
            name: format!("conical_product_{}", n),
            degree: 2 * n - 2,
            points,
            weights: scheme_weights,
        }
    }

    /// Build a rule from an optional centroid weight plus `(a, w)` orbits, each
    /// contributing the three points `(1 - 2a, a, a)` and permutations with weight `w`.
    fn fully_symmetric(
        name: &str,
        degree: usize,
        center_weight: Option<f64>,
        orbits: &[(f64, f64)],
    ) -> Self {
        let mut points = Vec::new();
        let mut weights = Vec::new();
        if let Some(w) = center_weight {
            points.push([1.0 / 3.0; 3]);
            weights.push(w);
        }
        for &(a, w) in orbits {
            let b = 1.0 - 2.0 * a;
            points.extend([[b, a, a], [a, b, a], [a, a, b]]);
            weights.extend([w; 3]);
        }
        Self {
            name: name.to_string(),
            degree,
            points,
            weights,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Highest total polynomial degree integrated exactly.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Map every scheme point into every triangle of the batch.
    ///
    /// Point `q` of triangle `t` lands at index `t * self.len() + q`, computed
    /// as `λ0·V0 + λ1·V1 + λ2·V2`.
    pub fn map_points(&self, triangles: &TriangleBatch) -> Points {
        let nq = self.points.len();
        let dim = triangles.dim();
        let mut mapped = Points::zeros(dim, triangles.len() * nq);
        for d in 0..dim {
            let axis = mapped.axis_mut(d);
            for t in 0..triangles.len() {
                let v0 = triangles.vertex(t, 0)[d];
                let v1 = triangles.vertex(t, 1)[d];
                let v2 = triangles.vertex(t, 2)[d];
                for (q, l) in self.points.iter().enumerate() {
                    axis[t * nq + q] = l[0] * v0 + l[1] * v1 + l[2] * v2;
                }
            }
        }
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Vec<QuadratureScheme> {
        let mut schemes = vec![
            QuadratureScheme::centroid(),
            QuadratureScheme::vertex(),
            QuadratureScheme::strang_fix_3(),
            QuadratureScheme::radon_7(),
        ];
        for n in 1..=8 {
            schemes.push(QuadratureScheme::conical_product(n).unwrap());
        }
        schemes
    }

    #[test]
    fn test_builtin_schemes_are_valid() {
        for s in builtin() {
            let rebuilt =
                QuadratureScheme::new(s.name(), s.degree(), s.points().to_vec(), s.weights().to_vec());
            assert!(rebuilt.is_ok(), "{} failed validation", s.name());
        }
        assert_eq!(QuadratureScheme::radon_7().len(), 7);
        assert_eq!(QuadratureScheme::conical_product(6).unwrap().degree(), 10);
        assert_eq!(QuadratureScheme::conical_product(6).unwrap().len(), 36);
    }

    #[test]
    fn test_invalid_schemes() {
        let err = QuadratureScheme::new("short", 1, vec![[1.0, 0.0, 0.0]], vec![0.5, 0.5]);
        assert!(matches!(err, Err(IntegrateError::ShapeMismatch { .. })));

        let err = QuadratureScheme::new("outside", 1, vec![[1.5, -0.5, 0.0]], vec![1.0]);
        assert!(matches!(err, Err(IntegrateError::InvalidParameter { .. })));

        let err = QuadratureScheme::new("heavy", 1, vec![[1.0 / 3.0; 3]], vec![2.0]);
        assert!(matches!(err, Err(IntegrateError::InvalidParameter { .. })));

        assert!(QuadratureScheme::new("empty", 0, vec![], vec![]).is_err());
        assert!(QuadratureScheme::conical_product(0).is_err());
    }

    #[test]
    fn test_from_cartesian() {
        let s = QuadratureScheme::from_cartesian(
            "cartesian_centroid",
            1,
            &[[1.0 / 3.0, 1.0 / 3.0]],
            vec![1.0],
        )
        .unwrap();
        let p = s.points()[0];
        assert!((p[0] - 1.0 / 3.0).abs() < 1e-15);
        assert!((p[1] - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_map_points_onto_triangle() {
        let batch = TriangleBatch::from_triangles(&[
            [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            [[2.0, 2.0], [4.0, 2.0], [2.0, 4.0]],
        ])
        .unwrap();
        let mapped = QuadratureScheme::vertex().map_points(&batch);
        assert_eq!(mapped.len(), 6);
        // vertex rule reproduces the vertices, triangle-major
        assert_eq!(mapped.point(0), vec![0.0, 0.0]);
        assert_eq!(mapped.point(1), vec![1.0, 0.0]);
        assert_eq!(mapped.point(4), vec![4.0, 2.0]);
        assert_eq!(mapped.point(5), vec![2.0, 4.0]);
    }
}
