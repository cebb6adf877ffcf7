//! Point and value batches exchanged with integrands.

use crate::integrate::error::{IntegrateError, IntegrateResult};

/// A batch of Cartesian points, stored axis-major.
///
/// Coordinates are laid out as `dim × len`: every x coordinate first, then
/// every y coordinate, and so on. Integrands usually work one axis at a time:
///
/// ```
/// use trisolvr::integrate::Points;
///
/// let p = Points::from_axes(2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// let sum: Vec<f64> = p.axis(0).iter().zip(p.axis(1)).map(|(x, y)| x + y).collect();
/// assert_eq!(sum, vec![2.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    dim: usize,
    len: usize,
    coords: Vec<f64>,
}

impl Points {
    /// Build a point batch from axis-major coordinates.
    pub fn from_axes(dim: usize, coords: Vec<f64>) -> IntegrateResult<Self> {
        if dim == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "dim".to_string(),
                message: "points need at least one axis".to_string(),
            });
        }
        if coords.len() % dim != 0 {
            return Err(IntegrateError::InvalidInput {
                context: format!(
                    "Points::from_axes: {} coordinates do not split into {} axes",
                    coords.len(),
                    dim
                ),
            });
        }
        let len = coords.len() / dim;
        Ok(Self { dim, len, coords })
    }

    pub(crate) fn zeros(dim: usize, len: usize) -> Self {
        Self {
            dim,
            len,
            coords: vec![0.0; dim * len],
        }
    }

    /// Spatial dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All coordinates along axis `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d >= self.dim()`.
    pub fn axis(&self, d: usize) -> &[f64] {
        &self.coords[d * self.len..(d + 1) * self.len]
    }

    pub(crate) fn axis_mut(&mut self, d: usize) -> &mut [f64] {
        &mut self.coords[d * self.len..(d + 1) * self.len]
    }

    /// Coordinates of point `i`, gathered across axes.
    pub fn point(&self, i: usize) -> Vec<f64> {
        (0..self.dim).map(|d| self.coords[d * self.len + i]).collect()
    }

    /// The raw `dim × len` buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }
}

/// Values laid out as `components × len`.
///
/// Used both for integrand output (one column per point) and for fixed-scheme
/// results (one column per triangle). Scalar data has a single component.
#[derive(Debug, Clone, PartialEq)]
pub struct Values {
    components: usize,
    len: usize,
    data: Vec<f64>,
}

impl Values {
    /// Single-component values.
    pub fn scalar(data: Vec<f64>) -> Self {
        Self {
            components: 1,
            len: data.len(),
            data,
        }
    }

    /// Values from a component-major buffer.
    pub fn new(components: usize, data: Vec<f64>) -> IntegrateResult<Self> {
        if components == 0 {
            return Err(IntegrateError::InvalidParameter {
                parameter: "components".to_string(),
                message: "need at least one component".to_string(),
            });
        }
        if data.len() % components != 0 {
            return Err(IntegrateError::ShapeMismatch {
                expected: format!("a multiple of {} values", components),
                actual: format!("{} values", data.len()),
                context: "Values::new".to_string(),
            });
        }
        let len = data.len() / components;
        Ok(Self {
            components,
            len,
            data,
        })
    }

    /// Values from one vector per component; all vectors must have equal length.
    pub fn from_components(components: Vec<Vec<f64>>) -> IntegrateResult<Self> {
        let Some(first) = components.first() else {
            return Err(IntegrateError::InvalidParameter {
                parameter: "components".to_string(),
                message: "need at least one component".to_string(),
            });
        };
        let len = first.len();
        if let Some(bad) = components.iter().find(|c| c.len() != len) {
            return Err(IntegrateError::ShapeMismatch {
                expected: format!("{} values per component", len),
                actual: format!("{} values", bad.len()),
                context: "Values::from_components".to_string(),
            });
        }
        let count = components.len();
        Ok(Self {
            components: count,
            len,
            data: components.concat(),
        })
    }

    pub(crate) fn zeros(components: usize, len: usize) -> Self {
        Self {
            components,
            len,
            data: vec![0.0; components * len],
        }
    }

    /// Number of components.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Length of each component.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One component as a slice.
    pub fn component(&self, c: usize) -> &[f64] {
        &self.data[c * self.len..(c + 1) * self.len]
    }

    pub(crate) fn component_mut(&mut self, c: usize) -> &mut [f64] {
        &mut self.data[c * self.len..(c + 1) * self.len]
    }

    /// Value of component `c` at position `i`.
    pub fn get(&self, c: usize, i: usize) -> f64 {
        self.data[c * self.len + i]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Stretch length-1 components over `len` entries; any other length must match.
    pub(crate) fn broadcast_to(self, len: usize, context: &str) -> IntegrateResult<Self> {
        if self.len == len {
            return Ok(self);
        }
        if self.len == 1 {
            let data = self
                .data
                .iter()
                .flat_map(|&v| std::iter::repeat_n(v, len))
                .collect();
            return Ok(Self {
                components: self.components,
                len,
                data,
            });
        }
        Err(IntegrateError::ShapeMismatch {
            expected: format!("{} values per component (or 1 to broadcast)", len),
            actual: format!("{} values per component", self.len),
            context: context.to_string(),
        })
    }
}

/// Anything an integrand may return.
///
/// Plain `Vec<f64>` is read as scalar output. Fallible integrands return
/// `IntegrateResult` of either form.
pub trait IntegrandOutput {
    fn into_values(self) -> IntegrateResult<Values>;
}

impl IntegrandOutput for Values {
    fn into_values(self) -> IntegrateResult<Values> {
        Ok(self)
    }
}

impl IntegrandOutput for Vec<f64> {
    fn into_values(self) -> IntegrateResult<Values> {
        Ok(Values::scalar(self))
    }
}

impl IntegrandOutput for IntegrateResult<Values> {
    fn into_values(self) -> IntegrateResult<Values> {
        self
    }
}

impl IntegrandOutput for IntegrateResult<Vec<f64>> {
    fn into_values(self) -> IntegrateResult<Values> {
        self.map(Values::scalar)
    }
}
