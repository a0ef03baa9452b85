//! Recursive Cox–de Boor evaluation of B-spline basis functions.

/// B-spline order (degree + 1) used throughout the engine.
pub const ORDER: usize = 4;

/// Evaluate the order-`k` basis function with support starting at knot `i`.
///
/// Base case (`k == 1`) is 1.0 on the half-open span `[knot[i], knot[i+1])`
/// and 0.0 elsewhere; a zero-width span is never active. In the recursive
/// blend, a term whose denominator vanishes (repeated knot at the clamped
/// ends) contributes 0.0 rather than NaN.
///
/// Pure function of its arguments; recursion depth is bounded by `k`.
pub fn basis(knots: &[f64], i: usize, k: usize, t: f64) -> f64 {
    if k == 1 {
        return if knots[i] < knots[i + 1] && knots[i] <= t && t < knots[i + 1] {
            1.0
        } else {
            0.0
        };
    }

    let mut left = 0.0;
    let denom = knots[i + k - 1] - knots[i];
    if denom != 0.0 {
        left = basis(knots, i, k - 1, t) * (t - knots[i]) / denom;
    }

    let mut right = 0.0;
    let denom = knots[i + k] - knots[i + 1];
    if denom != 0.0 {
        right = basis(knots, i + 1, k - 1, t) * (knots[i + k] - t) / denom;
    }

    left + right
}

/// The four cubic basis values active on span `i`, for control points
/// `i, i-1, i-2, i-3` in that order.
///
/// `span` must be at least 3 (the first span with four active control
/// points on a clamped cubic knot vector).
pub fn active_basis(knots: &[f64], span: usize, t: f64) -> [f64; 4] {
    debug_assert!(span >= 3, "span {} has fewer than 4 active points", span);
    [
        basis(knots, span, ORDER, t),
        basis(knots, span - 1, ORDER, t),
        basis(knots, span - 2, ORDER, t),
        basis(knots, span - 3, ORDER, t),
    ]
}
