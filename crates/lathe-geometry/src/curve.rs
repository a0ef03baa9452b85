//! Uniform clamped cubic B-spline curves.

use lathe_math::Point3;
use serde::{Deserialize, Serialize};

use crate::basis::{active_basis, ORDER};
use crate::knots::clamped_uniform_knots;
use lathe_core::{Result, Tolerance};

/// A uniform clamped cubic B-spline through an ordered control point set.
///
/// The knot vector is derived from the control point count alone, so the
/// curve is a pure function of the points (degree is fixed at 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformBSpline {
    knots: Vec<f64>,
    control_points: Vec<Point3>,
}

impl UniformBSpline {
    /// Fit a clamped cubic B-spline to `control_points`.
    ///
    /// Fails with `InsufficientControlPoints` for fewer than 4 points.
    pub fn fit(control_points: Vec<Point3>) -> Result<Self> {
        let knots = clamped_uniform_knots(control_points.len())?;
        Ok(Self {
            knots,
            control_points,
        })
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Parameter domain `(knot[3], knot[n])`, the non-clamped interior.
    pub fn domain(&self) -> (f64, f64) {
        let n = self.control_points.len();
        (self.knots[3], self.knots[n])
    }

    /// Index of the span containing `t`, in `3 .. n`.
    fn span_of(&self, t: f64) -> usize {
        let n = self.control_points.len();
        let mut span = 3;
        while span + 1 < n && self.knots[span + 1] <= t {
            span += 1;
        }
        span
    }

    /// Evaluate the curve at parameter `t`.
    ///
    /// `t` at or past the domain end returns the last control point exactly
    /// (the half-open basis support would otherwise evaluate to zero there);
    /// `t` before the domain start clamps to the domain start.
    pub fn point_at(&self, t: f64) -> Point3 {
        let (t_min, t_max) = self.domain();
        if t >= t_max {
            // fit guarantees at least 4 control points
            return self.control_points[self.control_points.len() - 1];
        }

        // Below t_min the basis support is empty too, so clamp first.
        let t = t.max(t_min);
        let span = self.span_of(t);
        blend_span(&self.knots, &self.control_points, span, t)
    }
}

/// Blend the four control points active on `span` at parameter `t`.
pub(crate) fn blend_span(knots: &[f64], control_points: &[Point3], span: usize, t: f64) -> Point3 {
    debug_assert!((3..control_points.len()).contains(&span));
    debug_assert_eq!(knots.len(), control_points.len() + ORDER);

    let b = active_basis(knots, span, t);
    debug_assert!(
        Tolerance::default_precision().linear_eq(b.iter().sum(), 1.0),
        "basis partition of unity violated at span {} t {}",
        span,
        t
    );
    control_points[span] * b[0]
        + control_points[span - 1] * b[1]
        + control_points[span - 2] * b[2]
        + control_points[span - 3] * b[3]
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_core::LatheError;
    use lathe_math::dvec3;

    fn arch() -> Vec<Point3> {
        vec![
            dvec3(-0.5, 0.0, 0.0),
            dvec3(-0.2, 0.5, 0.0),
            dvec3(0.2, 0.5, 0.0),
            dvec3(0.5, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_fit_too_few() {
        let pts = vec![dvec3(0.0, 0.0, 0.0); 3];
        assert!(matches!(
            UniformBSpline::fit(pts),
            Err(LatheError::InsufficientControlPoints(3))
        ));
    }

    #[test]
    fn test_endpoint_interpolation() {
        let spline = UniformBSpline::fit(arch()).unwrap();
        let (t0, t1) = spline.domain();
        assert!((spline.point_at(t0) - dvec3(-0.5, 0.0, 0.0)).length() < 1e-12);
        assert_eq!(spline.point_at(t1), dvec3(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_point_at_clamps_below_domain() {
        let spline = UniformBSpline::fit(arch()).unwrap();
        let (t0, _) = spline.domain();
        assert_eq!(spline.point_at(-0.1), spline.point_at(t0));
        assert_eq!(spline.point_at(f64::NEG_INFINITY), dvec3(-0.5, 0.0, 0.0));
    }

    #[test]
    fn test_domain() {
        let pts = (0..7).map(|i| dvec3(i as f64, 0.0, 0.0)).collect();
        let spline = UniformBSpline::fit(pts).unwrap();
        assert_eq!(spline.domain(), (0.0, 4.0));
    }

    #[test]
    fn test_symmetric_arch_midpoint() {
        // Symmetric control points give a curve symmetric about x = 0.
        let spline = UniformBSpline::fit(arch()).unwrap();
        let mid = spline.point_at(0.5);
        assert!(mid.x.abs() < 1e-12);
        assert!(mid.y > 0.0);
        assert_eq!(mid.z, 0.0);
    }

    #[test]
    fn test_interior_points_in_hull() {
        // Convex hull property: evaluated points stay inside the bounds of
        // the control points.
        let spline = UniformBSpline::fit(arch()).unwrap();
        let (t0, t1) = spline.domain();
        for i in 0..=50 {
            let t = t0 + (t1 - t0) * i as f64 / 50.0;
            let p = spline.point_at(t);
            assert!(p.x >= -0.5 - 1e-12 && p.x <= 0.5 + 1e-12);
            assert!(p.y >= -1e-12 && p.y <= 0.5 + 1e-12);
        }
    }
}
