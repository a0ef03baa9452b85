//! lathe geometry: uniform clamped cubic B-splines and polyline sampling.

pub mod basis;
pub mod curve;
pub mod knots;
pub mod sampler;

pub use curve::UniformBSpline;
pub use knots::clamped_uniform_knots;
pub use sampler::{sample_polyline, sample_polyline_with, SAMPLES_PER_SPAN};
