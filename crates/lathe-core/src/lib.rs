pub mod error;
pub mod tolerance;

pub use error::{LatheError, Result};
pub use tolerance::Tolerance;

/// Maximum number of control points the editor accepts.
pub const MAX_CONTROL_POINTS: usize = 75;

/// Minimum number of control points for a cubic B-spline.
pub const MIN_CONTROL_POINTS: usize = 4;
