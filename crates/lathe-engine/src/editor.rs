//! Single-owner editor state: control points in, curve and mesh out.

use std::path::Path;

use serde::{Deserialize, Serialize};

use lathe_core::{LatheError, Result, MAX_CONTROL_POINTS, MIN_CONTROL_POINTS};
use lathe_geometry::{sample_polyline, UniformBSpline};
use lathe_math::Point3;
use lathe_mesh::{revolve, RevolutionMesh, RevolveConfig};

use crate::persist;

/// How the swept surface is displayed. Cycling follows the editor's
/// surface-toggle key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceMode {
    #[default]
    Off,
    Wireframe,
    Shaded,
    Textured,
}

impl SurfaceMode {
    pub fn cycled(self) -> Self {
        match self {
            SurfaceMode::Off => SurfaceMode::Wireframe,
            SurfaceMode::Wireframe => SurfaceMode::Shaded,
            SurfaceMode::Shaded => SurfaceMode::Textured,
            SurfaceMode::Textured => SurfaceMode::Off,
        }
    }
}

/// The geometry engine behind the editor.
///
/// Owns all mutable state: the ordered control points and the derived curve
/// polyline and revolution mesh. Mutations mark the derived buffers stale;
/// `rebuild` recomputes both from scratch into fresh buffers and swaps them
/// in whole, so a renderer never observes a partially updated mesh.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    control_points: Vec<Point3>,
    curve: Vec<Point3>,
    mesh: RevolutionMesh,
    config: RevolveConfig,
    surface_mode: SurfaceMode,
    curve_visible: bool,
    dirty: bool,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RevolveConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// Sampled curve polyline from the last `rebuild`.
    pub fn curve(&self) -> &[Point3] {
        &self.curve
    }

    /// Swept surface from the last `rebuild`.
    pub fn mesh(&self) -> &RevolutionMesh {
        &self.mesh
    }

    pub fn config(&self) -> &RevolveConfig {
        &self.config
    }

    /// Whether the derived buffers are stale relative to the control points.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a control point, rejecting it once the capacity is reached.
    pub fn add_point(&mut self, p: Point3) -> Result<()> {
        if self.control_points.len() >= MAX_CONTROL_POINTS {
            return Err(LatheError::CapacityExceeded(MAX_CONTROL_POINTS));
        }
        self.control_points.push(p);
        self.dirty = true;
        Ok(())
    }

    /// Move an existing control point. `index` must come from
    /// `nearest_point` or be below `control_points().len()`.
    pub fn set_point(&mut self, index: usize, p: Point3) {
        self.control_points[index] = p;
        self.dirty = true;
    }

    /// Delete a control point, preserving the order of the rest.
    pub fn remove_point(&mut self, index: usize) -> Point3 {
        self.dirty = true;
        self.control_points.remove(index)
    }

    /// Drop all control points and both derived buffers.
    pub fn clear(&mut self) {
        self.control_points.clear();
        self.curve.clear();
        self.mesh = RevolutionMesh::default();
        self.dirty = false;
    }

    /// Index of the control point closest to the cursor position `(x, y)`.
    ///
    /// Screen-space selection: the z coordinate is ignored, as editor-placed
    /// points live in the z = 0 plane.
    pub fn nearest_point(&self, x: f64, y: f64) -> Option<usize> {
        self.control_points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let (dx, dy) = (p.x - x, p.y - y);
                (i, dx * dx + dy * dy)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    pub fn curve_visible(&self) -> bool {
        self.curve_visible
    }

    pub fn toggle_curve(&mut self) {
        self.curve_visible = !self.curve_visible;
    }

    pub fn surface_mode(&self) -> SurfaceMode {
        self.surface_mode
    }

    pub fn set_surface_mode(&mut self, mode: SurfaceMode) {
        self.surface_mode = mode;
    }

    pub fn cycle_surface_mode(&mut self) -> SurfaceMode {
        self.surface_mode = self.surface_mode.cycled();
        self.surface_mode
    }

    /// Recompute the curve polyline and the revolution mesh from the
    /// current control points.
    ///
    /// With fewer than 4 points both outputs are emptied and the call fails
    /// with `InsufficientControlPoints`; nothing is computed partially.
    pub fn rebuild(&mut self) -> Result<()> {
        if self.control_points.len() < MIN_CONTROL_POINTS {
            self.curve.clear();
            self.mesh = RevolutionMesh::default();
            self.dirty = false;
            return Err(LatheError::InsufficientControlPoints(
                self.control_points.len(),
            ));
        }

        let spline = UniformBSpline::fit(self.control_points.clone())?;
        let curve = sample_polyline(&spline);
        let mesh = revolve(&curve, &self.config);

        // Publish the finished buffers in one step.
        self.curve = curve;
        self.mesh = mesh;
        self.dirty = false;
        Ok(())
    }

    /// Persist the control points to `path` (see `persist` for the format).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        persist::save_control_points(path, &self.control_points)
    }

    /// Replace the control points with the contents of `path`.
    ///
    /// A corrupt or truncated file keeps the valid prefix and warns instead
    /// of failing; derived buffers are left stale until the next `rebuild`.
    /// Returns the number of points loaded.
    pub fn load_from(&mut self, path: &Path) -> Result<usize> {
        let outcome = persist::load_control_points(path)?;
        if let Some(warning) = &outcome.warning {
            eprintln!("Warning: control point load stopped early: {}", warning);
        }
        self.control_points = outcome.points;
        self.curve.clear();
        self.mesh = RevolutionMesh::default();
        self.dirty = true;
        Ok(self.control_points.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_math::dvec3;

    #[test]
    fn test_surface_mode_cycle() {
        let mut mode = SurfaceMode::Off;
        let order = [
            SurfaceMode::Wireframe,
            SurfaceMode::Shaded,
            SurfaceMode::Textured,
            SurfaceMode::Off,
        ];
        for expected in order {
            mode = mode.cycled();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn test_capacity_guard() {
        let mut editor = Editor::new();
        for i in 0..MAX_CONTROL_POINTS {
            editor.add_point(dvec3(i as f64, 0.0, 0.0)).unwrap();
        }
        let err = editor.add_point(dvec3(99.0, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, LatheError::CapacityExceeded(75)));
        assert_eq!(editor.control_points().len(), MAX_CONTROL_POINTS);
    }

    #[test]
    fn test_nearest_point() {
        let mut editor = Editor::new();
        editor.add_point(dvec3(-0.5, 0.0, 0.0)).unwrap();
        editor.add_point(dvec3(0.0, 0.5, 0.0)).unwrap();
        editor.add_point(dvec3(0.5, 0.0, 0.0)).unwrap();
        assert_eq!(editor.nearest_point(0.4, 0.1), Some(2));
        assert_eq!(editor.nearest_point(-0.1, 0.45), Some(1));
        assert_eq!(Editor::new().nearest_point(0.0, 0.0), None);
    }

    #[test]
    fn test_mutations_mark_dirty() {
        let mut editor = Editor::new();
        assert!(!editor.is_dirty());
        editor.add_point(dvec3(0.0, 0.0, 0.0)).unwrap();
        assert!(editor.is_dirty());

        editor.set_point(0, dvec3(1.0, 0.0, 0.0));
        assert!(editor.is_dirty());

        let removed = editor.remove_point(0);
        assert_eq!(removed, dvec3(1.0, 0.0, 0.0));
        assert!(editor.control_points().is_empty());
    }
}
