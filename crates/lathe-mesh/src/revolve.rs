//! Revolution sweep: rotate a sampled profile polyline about an axis and
//! emit one ring of quads per angular step.

use lathe_math::{Axis, Point3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Angular extent of a full sweep, in degrees.
pub const FULL_REVOLUTION_DEGREES: f64 = 360.0;

/// Finest supported angular step (2880 rings for a full revolution).
pub const MIN_STEP_DEGREES: f64 = 0.125;

/// Default angular step.
pub const DEFAULT_STEP_DEGREES: f64 = 8.0;

/// Sweep configuration: rotation axis and angular resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevolveConfig {
    pub axis: Axis,
    pub step_degrees: f64,
}

impl RevolveConfig {
    pub fn new(axis: Axis, step_degrees: f64) -> Self {
        Self {
            axis,
            step_degrees: step_degrees.clamp(MIN_STEP_DEGREES, FULL_REVOLUTION_DEGREES),
        }
    }

    /// Step the sweep actually uses, in degrees.
    ///
    /// The fields are public, so a literal-constructed or deserialized
    /// config may carry a step outside the supported range; the sweep and
    /// the ring count both derive from this clamped value.
    pub fn effective_step_degrees(&self) -> f64 {
        self.step_degrees
            .clamp(MIN_STEP_DEGREES, FULL_REVOLUTION_DEGREES)
    }

    /// Number of rings covering the full revolution.
    pub fn ring_count(&self) -> usize {
        (FULL_REVOLUTION_DEGREES / self.effective_step_degrees()).ceil() as usize
    }
}

impl Default for RevolveConfig {
    fn default() -> Self {
        Self::new(Axis::Y, DEFAULT_STEP_DEGREES)
    }
}

/// One quad of the swept surface, split into two triangles.
///
/// Vertices `0..3` and `3..6` are the triangles `(P_i, P_{i+1}, P'_{i+1})`
/// and `(P'_{i+1}, P'_i, P_i)`, where `P` is the ring's base position and
/// `P'` the position one angular step further.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadPatch {
    pub vertices: [Point3; 6],
}

impl QuadPatch {
    pub fn triangles(&self) -> [[Point3; 3]; 2] {
        let v = &self.vertices;
        [[v[0], v[1], v[2]], [v[3], v[4], v[5]]]
    }
}

/// Grid of quads indexed `[ring][sample pair]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevolutionMesh {
    pub rings: Vec<Vec<QuadPatch>>,
}

impl RevolutionMesh {
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Quads per ring (one fewer than the profile sample count).
    pub fn quads_per_ring(&self) -> usize {
        self.rings.first().map_or(0, Vec::len)
    }

    pub fn quad_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// Sweep a profile polyline about `config.axis` through a full revolution.
///
/// Every ring is rotated directly from the profile samples at its exact
/// cumulative angle, so consecutive rings share edge vertices exactly and
/// no error accumulates across steps. Rings are independent and computed
/// in parallel.
///
/// Fewer than 2 samples yields an empty mesh.
pub fn revolve(samples: &[Point3], config: &RevolveConfig) -> RevolutionMesh {
    if samples.len() < 2 {
        return RevolutionMesh::default();
    }

    let step = config.effective_step_degrees().to_radians();
    let ring_count = config.ring_count();
    let axis = config.axis;

    let rings = (0..ring_count)
        .into_par_iter()
        .map(|ring| {
            let base = ring_positions(samples, axis, step * ring as f64);
            let lead = ring_positions(samples, axis, step * (ring + 1) as f64);
            (0..samples.len() - 1)
                .map(|i| QuadPatch {
                    vertices: [base[i], base[i + 1], lead[i + 1], lead[i + 1], lead[i], base[i]],
                })
                .collect()
        })
        .collect();

    RevolutionMesh { rings }
}

fn ring_positions(samples: &[Point3], axis: Axis, angle: f64) -> Vec<Point3> {
    if angle == 0.0 {
        return samples.to_vec();
    }
    samples.iter().map(|&p| axis.rotate(p, angle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_math::dvec3;

    fn profile() -> Vec<Point3> {
        vec![
            dvec3(0.5, 0.0, 0.0),
            dvec3(0.6, 0.3, 0.0),
            dvec3(0.4, 0.6, 0.0),
        ]
    }

    #[test]
    fn test_ring_and_quad_counts() {
        let config = RevolveConfig::new(Axis::Y, 8.0);
        let mesh = revolve(&profile(), &config);
        assert_eq!(mesh.ring_count(), 45);
        assert_eq!(mesh.quads_per_ring(), 2);
        assert_eq!(mesh.quad_count(), 45 * 2);
    }

    #[test]
    fn test_first_ring_base_is_unrotated() {
        let samples = profile();
        let mesh = revolve(&samples, &RevolveConfig::default());
        let ring0 = &mesh.rings[0];
        for (i, quad) in ring0.iter().enumerate() {
            assert_eq!(quad.vertices[0], samples[i]);
            assert_eq!(quad.vertices[1], samples[i + 1]);
        }
    }

    #[test]
    fn test_adjacent_rings_share_edges_exactly() {
        let mesh = revolve(&profile(), &RevolveConfig::new(Axis::Y, 15.0));
        for j in 0..mesh.ring_count() - 1 {
            for (a, b) in mesh.rings[j].iter().zip(&mesh.rings[j + 1]) {
                // Rotated edge of ring j == base edge of ring j + 1, bitwise.
                assert_eq!(a.vertices[4], b.vertices[0]);
                assert_eq!(a.vertices[2], b.vertices[1]);
            }
        }
    }

    #[test]
    fn test_radius_preserved_across_rings() {
        let samples = profile();
        let mesh = revolve(&samples, &RevolveConfig::new(Axis::Y, 1.0));
        let last = mesh.rings.last().unwrap();
        for (i, quad) in last.iter().enumerate() {
            let r0 = Axis::Y.radius(samples[i]);
            let r = Axis::Y.radius(quad.vertices[0]);
            assert!((r - r0).abs() < 1e-9, "ring 359 drifted: {} vs {}", r, r0);
        }
    }

    #[test]
    fn test_single_point_profile_is_empty() {
        let mesh = revolve(&[dvec3(1.0, 0.0, 0.0)], &RevolveConfig::default());
        assert!(mesh.is_empty());
        assert_eq!(mesh.quad_count(), 0);
    }

    #[test]
    fn test_step_clamped_to_supported_range() {
        let config = RevolveConfig::new(Axis::Y, 0.0001);
        assert_eq!(config.step_degrees, MIN_STEP_DEGREES);
        assert_eq!(config.ring_count(), 2880);
    }

    #[test]
    fn test_literal_config_step_clamped_consistently() {
        // Configs built without `new` still sweep exactly one revolution.
        let config = RevolveConfig {
            axis: Axis::Y,
            step_degrees: 0.05,
        };
        assert_eq!(config.ring_count(), 2880);

        let samples = profile();
        let mesh = revolve(&samples, &config);
        assert_eq!(mesh.ring_count(), 2880);
        let closing = mesh.rings.last().unwrap()[0].vertices[4];
        assert!((closing - samples[0]).length() < 1e-9);

        let zero = RevolveConfig {
            axis: Axis::Y,
            step_degrees: 0.0,
        };
        assert_eq!(zero.ring_count(), 2880);
    }

    #[test]
    fn test_uneven_step_still_covers_revolution() {
        let config = RevolveConfig::new(Axis::Y, 7.0);
        // 360 / 7 is not integral; the sweep rounds up rather than leaving a gap.
        assert_eq!(config.ring_count(), 52);
    }
}
