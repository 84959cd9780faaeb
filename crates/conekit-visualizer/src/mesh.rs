//! 3D lateral-surface mesh of a truncated cone.
//!
//! Two circular rings of [`RING_STEPS`] points each, radius D/2 at z = 0 and
//! d/2 at z = l, triangulated into a closed band. Point generation is
//! O(steps) with steps fixed, so mesh construction is bounded regardless of
//! input.

use conekit_core::ConeSpec;
use nalgebra::Point3;
use std::f64::consts::PI;
use tracing::debug;

/// Points per ring.
pub const RING_STEPS: usize = 50;

/// Triangulated lateral surface of a truncated cone
#[derive(Debug, Clone, PartialEq)]
pub struct ConeMesh {
    /// Ring vertices: first the large-diameter ring at z = 0, then the
    /// small-diameter ring at z = l.
    pub vertices: Vec<Point3<f64>>,
    /// Triangle faces as vertex indices
    pub faces: Vec<[u32; 3]>,
}

impl ConeMesh {
    /// Build the mesh for the given dimensions.
    pub fn new(large_diameter: f64, small_diameter: f64, length: f64) -> Self {
        let r_large = large_diameter / 2.0;
        let r_small = small_diameter / 2.0;

        let mut vertices = Vec::with_capacity(2 * RING_STEPS);
        for i in 0..RING_STEPS {
            let theta = 2.0 * PI * i as f64 / RING_STEPS as f64;
            vertices.push(Point3::new(r_large * theta.cos(), r_large * theta.sin(), 0.0));
        }
        for i in 0..RING_STEPS {
            let theta = 2.0 * PI * i as f64 / RING_STEPS as f64;
            vertices.push(Point3::new(
                r_small * theta.cos(),
                r_small * theta.sin(),
                length,
            ));
        }

        // Each ring segment becomes a quad split into two triangles.
        let mut faces = Vec::with_capacity(2 * RING_STEPS);
        let steps = RING_STEPS as u32;
        for i in 0..steps {
            let next = (i + 1) % steps;
            let bottom_a = i;
            let bottom_b = next;
            let top_a = steps + i;
            let top_b = steps + next;
            faces.push([bottom_a, bottom_b, top_a]);
            faces.push([bottom_b, top_b, top_a]);
        }

        debug!(
            vertices = vertices.len(),
            faces = faces.len(),
            "built cone mesh"
        );
        Self { vertices, faces }
    }

    /// Build the mesh from a cone spec.
    pub fn from_spec(spec: &ConeSpec) -> Self {
        Self::new(spec.large_diameter, spec.small_diameter, spec.length)
    }

    /// Axis-aligned bounding box of the mesh.
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        for v in &self.vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_counts() {
        let mesh = ConeMesh::new(50.0, 30.0, 100.0);
        assert_eq!(mesh.vertices.len(), 2 * RING_STEPS);
        assert_eq!(mesh.faces.len(), 2 * RING_STEPS);
    }

    #[test]
    fn test_ring_radii_and_planes() {
        let mesh = ConeMesh::new(50.0, 30.0, 100.0);
        for v in &mesh.vertices[..RING_STEPS] {
            assert_eq!(v.z, 0.0);
            let r = (v.x * v.x + v.y * v.y).sqrt();
            assert!((r - 25.0).abs() < 1e-9);
        }
        for v in &mesh.vertices[RING_STEPS..] {
            assert_eq!(v.z, 100.0);
            let r = (v.x * v.x + v.y * v.y).sqrt();
            assert!((r - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_faces_reference_valid_vertices() {
        let mesh = ConeMesh::new(50.0, 30.0, 100.0);
        let n = mesh.vertices.len() as u32;
        for face in &mesh.faces {
            for &idx in face {
                assert!(idx < n);
            }
        }
    }

    #[test]
    fn test_bounds() {
        let mesh = ConeMesh::new(50.0, 30.0, 100.0);
        let (min, max) = mesh.bounds();
        assert!((max.x - 25.0).abs() < 1e-6);
        assert!((min.x + 25.0).abs() < 1e-6);
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 100.0);
    }
}
