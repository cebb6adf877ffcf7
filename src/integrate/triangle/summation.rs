//! Summation strategies for reducing quadrature terms.
//!
//! Every integrator takes a [`SumFn`], so the reduction can be swapped
//! without touching the integration code.

/// A reduction over a slice of terms.
pub type SumFn = fn(&[f64]) -> f64;

/// Compensated summation (Neumaier's variant of Kahan).
///
/// The running compensation also captures the error when a term is larger
/// than the partial sum, which plain Kahan summation loses. Once the sum
/// overflows the compensation is meaningless, so the plain sum is returned.
///
/// ```
/// use trisolvr::integrate::kahan_sum;
///
/// assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
/// ```
pub fn kahan_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    if sum.is_finite() {
        sum + compensation
    } else {
        sum
    }
}

/// Pairwise (cascade) summation.
///
/// Error grows as O(log n) instead of O(n).
pub fn pairwise_sum(values: &[f64]) -> f64 {
    const BLOCK: usize = 8;
    if values.len() <= BLOCK {
        return naive_sum(values);
    }
    let (left, right) = values.split_at(values.len() / 2);
    pairwise_sum(left) + pairwise_sum(right)
}

/// Left-to-right summation.
pub fn naive_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kahan_recovers_cancelled_term() {
        assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
        assert_eq!(naive_sum(&[1e16, 1.0, -1e16]), 0.0);
    }

    #[test]
    fn test_kahan_keeps_infinities() {
        assert_eq!(kahan_sum(&[f64::INFINITY]), f64::INFINITY);
        assert_eq!(kahan_sum(&[1.0, f64::NEG_INFINITY, 2.0]), f64::NEG_INFINITY);
        assert_eq!(kahan_sum(&[f64::MAX, f64::MAX]), f64::INFINITY);
        assert!(kahan_sum(&[f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }

    #[test]
    fn test_long_sums() {
        let values = vec![0.1; 1_000_000];
        assert!((kahan_sum(&values) - 100_000.0).abs() < 1e-9);
        assert!((pairwise_sum(&values) - 100_000.0).abs() < 1e-8);
        assert!((naive_sum(&values) - 100_000.0).abs() > (kahan_sum(&values) - 100_000.0).abs());
    }

    #[test]
    fn test_empty_and_short() {
        assert_eq!(kahan_sum(&[]), 0.0);
        assert_eq!(pairwise_sum(&[]), 0.0);
        assert_eq!(pairwise_sum(&[1.0, 2.0, 3.0]), 6.0);
    }
}
