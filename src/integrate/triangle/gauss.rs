//! Gauss-Legendre nodes on the unit interval.
//!
//! Used to build collapsed product rules on the triangle. An n-point rule is
//! exact for polynomials of degree 2n-1.

/// Nodes and weights of the n-point Gauss-Legendre rule on [0, 1].
///
/// Nodes are sorted ascending; weights sum to 1. `n` must be at least 1.
pub(crate) fn gauss_legendre_unit(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(n);

    let eps = 1e-15;
    let max_iter = 100;

    // Roots come in symmetric pairs; only the positive half is searched.
    let m = n.div_ceil(2);

    for i in 0..m {
        // Chebyshev-like initial guess
        let mut x = ((4 * i + 3) as f64 / (4 * n + 2) as f64 * std::f64::consts::PI).cos();

        for _ in 0..max_iter {
            let (p, dp) = legendre_eval(n, x);
            let dx = p / dp;
            x -= dx;
            if dx.abs() < eps {
                break;
            }
        }

        let (_, dp) = legendre_eval(n, x);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);

        if 2 * i + 1 == n {
            pairs.push((0.0, w));
        } else {
            pairs.push((x, w));
            pairs.push((-x, w));
        }
    }

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    // [-1, 1] -> [0, 1]
    pairs
        .into_iter()
        .map(|(x, w)| (0.5 * (x + 1.0), 0.5 * w))
        .unzip()
}

/// P_n(x) and P_n'(x) by the three-term recurrence.
fn legendre_eval(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;
    let mut dp_prev = 0.0;
    let mut dp_curr = 1.0;

    for k in 1..n {
        let k = k as f64;
        let p_next = ((2.0 * k + 1.0) * x * p_curr - k * p_prev) / (k + 1.0);
        let dp_next = ((2.0 * k + 1.0) * (p_curr + x * dp_curr) - k * dp_prev) / (k + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
        dp_prev = dp_curr;
        dp_curr = dp_next;
    }

    (p_curr, dp_curr)
}
