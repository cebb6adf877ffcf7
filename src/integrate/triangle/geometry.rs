//! Triangle batches, areas and triforce subdivision.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// A batch of triangles embedded in `dim`-dimensional space.
///
/// Vertices are stored contiguously as `len × 3 × dim`. A single triangle is
/// a batch of length one.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleBatch {
    dim: usize,
    vertices: Vec<f64>,
}

impl TriangleBatch {
    /// Build a batch from a flat `len × 3 × dim` buffer.
    pub fn new(dim: usize, vertices: Vec<f64>) -> IntegrateResult<Self> {
        if dim < 2 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "dim".to_string(),
                message: format!("triangles need at least 2 dimensions, got {}", dim),
            });
        }
        if vertices.len() % (3 * dim) != 0 {
            return Err(IntegrateError::InvalidInput {
                context: format!(
                    "TriangleBatch::new: {} coordinates is not a multiple of 3 × {}",
                    vertices.len(),
                    dim
                ),
            });
        }
        if let Some(pos) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(IntegrateError::InvalidInput {
                context: format!(
                    "TriangleBatch::new: non-finite coordinate in triangle {}",
                    pos / (3 * dim)
                ),
            });
        }
        Ok(Self { dim, vertices })
    }

    /// Build a batch from fixed-size vertex arrays.
    ///
    /// ```
    /// use trisolvr::integrate::TriangleBatch;
    ///
    /// let batch = TriangleBatch::from_triangles(&[
    ///     [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
    ///     [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    /// ])
    /// .unwrap();
    /// assert_eq!(batch.len(), 2);
    /// ```
    pub fn from_triangles<const D: usize>(triangles: &[[[f64; D]; 3]]) -> IntegrateResult<Self> {
        let vertices = triangles
            .iter()
            .flat_map(|t| t.iter().flat_map(|v| v.iter().copied()))
            .collect();
        Self::new(D, vertices)
    }

    /// A batch holding one triangle.
    pub fn single<const D: usize>(triangle: [[f64; D]; 3]) -> IntegrateResult<Self> {
        Self::from_triangles(&[triangle])
    }

    /// Spatial dimension of the vertices.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.vertices.len() / (3 * self.dim)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex `k` (0, 1 or 2) of triangle `t`.
    pub fn vertex(&self, t: usize, k: usize) -> &[f64] {
        let start = (3 * t + k) * self.dim;
        &self.vertices[start..start + self.dim]
    }

    /// The raw `len × 3 × dim` buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.vertices
    }

    /// Keep the triangles whose mask entry is `true`, in order.
    ///
    /// `mask` needs one entry per triangle; triangles past the end of a
    /// shorter mask are dropped (debug builds assert on the length).
    pub fn select(&self, mask: &[bool]) -> Self {
        debug_assert_eq!(mask.len(), self.len(), "select: mask length");
        let stride = 3 * self.dim;
        let vertices = self
            .vertices
            .chunks_exact(stride)
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .flat_map(|(tri, _)| tri.iter().copied())
            .collect();
        Self {
            dim: self.dim,
            vertices,
        }
    }
}

/// Area of one triangle given its three vertices.
///
/// Uses dot products of the cyclic edges only, so the formula holds in any
/// embedding dimension. The radicand is clamped at zero: collinear input gives
/// `0.0`, never NaN.
///
/// # Panics
///
/// Panics if `v1` or `v2` is shorter than `v0`.
pub fn triangle_area(v0: &[f64], v1: &[f64], v2: &[f64]) -> f64 {
    // e0 = v1 - v0, e1 = v2 - v1, e2 = v0 - v2
    let (mut d0, mut d1, mut d2) = (0.0, 0.0, 0.0);
    for k in 0..v0.len() {
        let e0 = v1[k] - v0[k];
        let e1 = v2[k] - v1[k];
        let e2 = v0[k] - v2[k];
        d0 += e1 * e2;
        d1 += e2 * e0;
        d2 += e0 * e1;
    }
    0.5 * (d2 * d0 + d0 * d1 + d1 * d2).max(0.0).sqrt()
}

/// Area of every triangle in the batch.
pub fn area(triangles: &TriangleBatch) -> Vec<f64> {
    (0..triangles.len())
        .map(|t| {
            triangle_area(
                triangles.vertex(t, 0),
                triangles.vertex(t, 1),
                triangles.vertex(t, 2),
            )
        })
        .collect()
}

/// Split every triangle into four by connecting its edge midpoints.
///
/// ```text
///          v2
///          /\
///      m1 /__\ m0
///        /\  /\
///       /__\/__\
///     v0   m2   v1
/// ```
///
/// Children of triangle `t` occupy positions `4t..4t + 4`: the three corner
/// triangles at `v0`, `v1`, `v2`, then the central one. All four keep the
/// parent's orientation.
pub fn triforce(triangles: &TriangleBatch) -> TriangleBatch {
    let dim = triangles.dim;
    let mut vertices = Vec::with_capacity(4 * triangles.vertices.len());

    for t in 0..triangles.len() {
        let v = [
            triangles.vertex(t, 0),
            triangles.vertex(t, 1),
            triangles.vertex(t, 2),
        ];
        let mid = |a: &[f64], b: &[f64]| -> Vec<f64> {
            a.iter().zip(b).map(|(x, y)| 0.5 * (x + y)).collect()
        };
        let m0 = mid(v[1], v[2]);
        let m1 = mid(v[2], v[0]);
        let m2 = mid(v[0], v[1]);

        let children: [[&[f64]; 3]; 4] = [
            [v[0], &m2, &m1],
            [&m2, v[1], &m0],
            [&m1, &m0, v[2]],
            [&m0, &m1, &m2],
        ];
        for child in children {
            for vertex in child {
                vertices.extend_from_slice(vertex);
            }
        }
    }

    TriangleBatch { dim, vertices }
}
