//! lathe tessellation: sweeping a sampled profile curve about an axis into
//! an oriented triangle mesh.

pub mod normal;
pub mod revolve;
pub mod triangulate;

pub use normal::face_normal;
pub use revolve::{revolve, QuadPatch, RevolutionMesh, RevolveConfig};
pub use triangulate::TriangleMesh;
