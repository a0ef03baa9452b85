//! Per-face normal estimation for lit rendering.

use lathe_math::{Point3, Vector3};

/// Cross products shorter than this are treated as degenerate.
const DEGENERATE_EPS: f64 = 1e-12;

/// Unit normal of the triangle `(a, b, c)`.
///
/// Edges are measured from the second vertex: `n = (a - b) x (c - b)`,
/// normalized. With the sweep's winding (base edge first, rotated edge
/// second) this orients both triangles of a quad the same way, so a flat
/// patch lights uniformly.
///
/// Returns `None` for degenerate triangles (zero-length or collinear
/// edges) instead of propagating NaN into the shading path.
pub fn face_normal(a: Point3, b: Point3, c: Point3) -> Option<Vector3> {
    let n = (a - b).cross(c - b);
    let len = n.length();
    if len < DEGENERATE_EPS {
        None
    } else {
        Some(n / len)
    }
}
