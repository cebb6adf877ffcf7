//! Error types for triangle integration.

use std::fmt;

/// Result type for integration operations.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Errors that can occur during triangle integration.
#[derive(Debug, Clone)]
pub enum IntegrateError {
    /// A triangle whose area must be positive has zero (or numerically zero) area.
    DegenerateTriangle {
        index: usize,
        area: f64,
        context: String,
    },

    /// Subdivision produced a triangle no larger than the minimum area floor.
    ///
    /// The requested tolerance cannot be reached by refinement, typically
    /// because the integrand is singular or discontinuous inside a triangle.
    MinimumAreaViolated {
        area: f64,
        min_area: f64,
        round: usize,
        context: String,
    },

    /// Integrand output does not line up with the evaluation points.
    ShapeMismatch {
        expected: String,
        actual: String,
        context: String,
    },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// Invalid input array size or dimensions.
    InvalidInput { context: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateTriangle {
                index,
                area,
                context,
            } => {
                write!(
                    f,
                    "{}: triangle {} is degenerate (area = {:.3e})",
                    context, index, area
                )
            }
            Self::MinimumAreaViolated {
                area,
                min_area,
                round,
                context,
            } => {
                write!(
                    f,
                    "{}: subdivision in round {} produced area {:.3e} <= minimum {:.3e}; tolerance unreachable",
                    context, round, area, min_area
                )
            }
            Self::ShapeMismatch {
                expected,
                actual,
                context,
            } => {
                write!(
                    f,
                    "{}: shape mismatch, expected {} but got {}",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::InvalidInput { context } => {
                write!(f, "Invalid input: {}", context)
            }
            Self::NumrError(msg) => {
                write!(f, "numr error: {}", msg)
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

impl From<numr::error::Error> for IntegrateError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
