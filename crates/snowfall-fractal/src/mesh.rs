//! Flat triangle-list mesh container

use snowfall_core::Vec3;

/// A generated flake mesh: every 3 consecutive vertices form one triangle
/// (triangle list, not indexed). Immutable once generation finishes.
pub struct FlakeMesh {
    /// Vertex positions in flake-local space
    pub vertices: Vec<Vec3>,
}

impl FlakeMesh {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Iterate triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.vertices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }

    /// Summed area of all triangles. Overlapping triangles (the inward peaks
    /// sit on top of the base) are counted as drawn, not as covered region.
    pub fn area(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| {
                let u = b - a;
                let v = c - a;
                0.5 * (u.x * v.y - u.y * v.x).abs()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_iteration_matches_counts() {
        let mesh = FlakeMesh {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
            ],
        };
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn area_of_unit_right_triangles() {
        let mesh = FlakeMesh {
            vertices: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                // Same triangle with opposite winding still counts positive
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ],
        };
        assert!((mesh.area() - 1.0).abs() < 1e-6);
    }
}
