//! Dense polyline sampling of B-spline curves.

use lathe_math::Point3;

use crate::curve::{blend_span, UniformBSpline};

/// Number of samples taken per knot span.
pub const SAMPLES_PER_SPAN: usize = 5;

/// Sample a spline into a polyline at the default per-span density.
pub fn sample_polyline(spline: &UniformBSpline) -> Vec<Point3> {
    sample_polyline_with(spline, SAMPLES_PER_SPAN)
}

/// Sample a spline into a polyline, `per_span` samples per knot span.
///
/// Walks the valid spans `3 .. n` in parameter order, subdividing each span
/// width into `per_span` equal sub-steps, and finishes with one terminal
/// sample equal to the last control point so the polyline lands on the
/// curve endpoint exactly.
///
/// Stateless; rebuilding from the same spline yields identical output.
pub fn sample_polyline_with(spline: &UniformBSpline, per_span: usize) -> Vec<Point3> {
    assert!(per_span > 0, "per_span must be positive");

    let knots = spline.knots();
    let control_points = spline.control_points();
    let n = control_points.len();

    let mut polyline = Vec::with_capacity((n - 3) * per_span + 1);
    for span in 3..n {
        let dt = (knots[span + 1] - knots[span]) / per_span as f64;
        let mut t = knots[span];
        for _ in 0..per_span {
            polyline.push(blend_span(knots, control_points, span, t));
            t += dt;
        }
    }

    // The half-open spans never reach the domain end; close the polyline on
    // the endpoint the clamped knots interpolate.
    polyline.push(control_points[n - 1]);

    polyline
}
