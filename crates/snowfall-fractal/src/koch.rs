//! Recursive Koch subdivision
//!
//! Each directed edge (p, q) emits an outward and an inward peak triangle over
//! its middle third, then recurses on eight sub-edges. Recursion bottoms out
//! below depth 0, so any finite starting depth >= -1 terminates.

use crate::mesh::FlakeMesh;
use snowfall_core::Vec3;

/// Number of triangles one directed edge emits at a given recursion depth:
/// `T(d) = 2 + 8 * T(d - 1)`, with `T(-1) = 0`.
pub fn triangles_per_edge(depth: i32) -> usize {
    if depth < 0 {
        return 0;
    }
    let mut t = 0usize;
    for _ in 0..=depth {
        t = 2 + 8 * t;
    }
    t
}

/// Generate the Koch mesh for an arbitrary triangle.
///
/// The three corners are stored first (they draw as the base triangle), then
/// each directed edge is subdivided. The result is a flat triangle soup with
/// `3 + 9 * triangles_per_edge(depth)` vertices.
pub fn generate(a: Vec3, b: Vec3, c: Vec3, depth: i32) -> FlakeMesh {
    let mut mesh = FlakeMesh::with_capacity(3 + 9 * triangles_per_edge(depth));
    mesh.vertices.push(a);
    mesh.vertices.push(b);
    mesh.vertices.push(c);
    koch_edge(&mut mesh.vertices, a, b, depth);
    koch_edge(&mut mesh.vertices, b, c, depth);
    koch_edge(&mut mesh.vertices, c, a, depth);
    mesh
}

/// Generate the standard snowflake: the fixed equilateral base triangle
/// subdivided to `depth` levels.
pub fn snowflake_mesh(depth: i32) -> FlakeMesh {
    // Equilateral base triangle centered near the origin
    let a = Vec3::new(-0.5, -0.25, 0.0);
    let b = Vec3::new(0.5, -0.25, 0.0);
    let c = Vec3::new(0.0, 0.75_f32.sqrt() - 0.25, 0.0);
    generate(a, b, c, depth)
}

fn koch_edge(vertices: &mut Vec<Vec3>, p: Vec3, q: Vec3, depth: i32) {
    if depth < 0 {
        return;
    }

    // Perpendicular left un-normalized on purpose: its magnitude equals the
    // edge length, so peak offsets scale down with each subdivision level.
    let normal = Vec3::new(-(p.y - q.y), -(q.x - p.x), 0.0);
    let peak_ratio = 3.0_f32.sqrt() / 6.0;
    let mid = p.midpoint(&q);
    let peak_out = normal * peak_ratio + mid;
    let peak_in = -(normal * peak_ratio) + mid;

    // Trisection points of the edge
    let d = (p * 2.0 + q) * (1.0 / 3.0);
    let e = (p + q * 2.0) * (1.0 / 3.0);

    vertices.push(peak_out);
    vertices.push(d);
    vertices.push(e);
    vertices.push(peak_in);
    vertices.push(d);
    vertices.push(e);

    // Sub-edge order matters only for draw order, not geometry
    koch_edge(vertices, p, d, depth - 1);
    koch_edge(vertices, q, e, depth - 1);
    koch_edge(vertices, peak_out, d, depth - 1);
    koch_edge(vertices, d, e, depth - 1);
    koch_edge(vertices, e, peak_out, depth - 1);
    koch_edge(vertices, peak_in, d, depth - 1);
    koch_edge(vertices, d, e, depth - 1);
    koch_edge(vertices, e, peak_in, depth - 1);
}
