use crate::Point3;
use serde::{Deserialize, Serialize};

/// Coordinate axis a profile curve is revolved about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    /// Rotate `p` about this axis by `angle` radians.
    ///
    /// The Y case maps `x' = x cos + z sin`, `z' = -x sin + z cos`, so a
    /// positive angle carries +X toward -Z; X and Z are the cyclic analogues.
    pub fn rotate(self, p: Point3, angle: f64) -> Point3 {
        let (sin, cos) = angle.sin_cos();
        match self {
            Axis::X => Point3::new(p.x, p.y * cos + p.z * sin, -p.y * sin + p.z * cos),
            Axis::Y => Point3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos),
            Axis::Z => Point3::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos, p.z),
        }
    }

    /// Distance from `p` to the axis line through the origin.
    pub fn radius(self, p: Point3) -> f64 {
        match self {
            Axis::X => (p.y * p.y + p.z * p.z).sqrt(),
            Axis::Y => (p.x * p.x + p.z * p.z).sqrt(),
            Axis::Z => (p.x * p.x + p.y * p.y).sqrt(),
        }
    }
}
