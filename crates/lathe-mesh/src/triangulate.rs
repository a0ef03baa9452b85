//! Flattening the quad grid into renderer-facing triangle buffers.

use lathe_math::{Aabb3, Point2, Point3, Vector3};

use crate::normal::face_normal;
use crate::revolve::RevolutionMesh;

/// GPU-ready triangle mesh with flat per-vertex data.
///
/// Vertices are not shared between faces: each triangle carries its own
/// three positions so the face normal can be replicated per vertex for
/// flat shading. Degenerate faces get a zero normal.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vector3>,
    pub indices: Vec<u32>,
    pub uvs: Vec<Point2>,
}

impl TriangleMesh {
    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Merge another mesh into this one, offsetting indices appropriately.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Compute the axis-aligned bounding box of all positions.
    pub fn bounding_box(&self) -> Aabb3 {
        Aabb3::from_points(&self.positions).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}

impl RevolutionMesh {
    /// Flatten the quad grid into triangle buffers for the three surface
    /// renderers (wireframe, lit, textured).
    ///
    /// UVs map grid indices onto the unit square: u follows the ring index,
    /// v the profile sample index, both normalized in floating point.
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let ring_count = self.ring_count();
        let quads = self.quads_per_ring();
        let mut mesh = TriangleMesh::default();
        if ring_count == 0 || quads == 0 {
            return mesh;
        }

        let u_scale = 1.0 / ring_count as f64;
        let v_scale = 1.0 / quads as f64;

        let face_count = self.quad_count() * 2;
        mesh.positions.reserve(face_count * 3);
        mesh.normals.reserve(face_count * 3);
        mesh.uvs.reserve(face_count * 3);
        mesh.indices.reserve(face_count * 3);

        for (j, ring) in self.rings.iter().enumerate() {
            let u0 = j as f64 * u_scale;
            let u1 = (j + 1) as f64 * u_scale;
            for (i, quad) in ring.iter().enumerate() {
                let v0 = i as f64 * v_scale;
                let v1 = (i + 1) as f64 * v_scale;
                let uvs = [
                    // (P_i, P_{i+1}, P'_{i+1})
                    Point2::new(u0, v0),
                    Point2::new(u0, v1),
                    Point2::new(u1, v1),
                    // (P'_{i+1}, P'_i, P_i)
                    Point2::new(u1, v1),
                    Point2::new(u1, v0),
                    Point2::new(u0, v0),
                ];

                for (tri, tri_uvs) in quad.triangles().iter().zip(uvs.chunks_exact(3)) {
                    let normal =
                        face_normal(tri[0], tri[1], tri[2]).unwrap_or(Vector3::ZERO);
                    for (&p, &uv) in tri.iter().zip(tri_uvs) {
                        mesh.indices.push(mesh.positions.len() as u32);
                        mesh.positions.push(p);
                        mesh.normals.push(normal);
                        mesh.uvs.push(uv);
                    }
                }
            }
        }

        mesh
    }
}
