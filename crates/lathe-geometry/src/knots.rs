//! Knot vector construction for uniform clamped cubic B-splines.

use lathe_core::{LatheError, Result, MIN_CONTROL_POINTS};

/// Build the clamped uniform knot vector for `n` control points.
///
/// Returns `n + 4` knots (`n + degree + 1` for degree 3): the first four
/// are 0, the last four are `n - 3`, and the interior ramps by 1 per index,
/// so the curve interpolates both endpoint control points.
///
/// Fails with `InsufficientControlPoints` when `n < 4`.
pub fn clamped_uniform_knots(n: usize) -> Result<Vec<f64>> {
    if n < MIN_CONTROL_POINTS {
        return Err(LatheError::InsufficientControlPoints(n));
    }

    let mut knots = Vec::with_capacity(n + 4);
    for i in 0..n + 4 {
        let value = if i <= 3 {
            0.0
        } else if i <= n - 1 {
            (i - 3) as f64
        } else {
            (n - 3) as f64
        };
        knots.push(value);
    }

    Ok(knots)
}
