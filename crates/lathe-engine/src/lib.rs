//! lathe editor engine: owns the control point list and the derived curve
//! and mesh buffers, and persists control points to disk.

pub mod editor;
pub mod persist;

pub use editor::{Editor, SurfaceMode};
pub use persist::{load_control_points, save_control_points, LoadOutcome};
