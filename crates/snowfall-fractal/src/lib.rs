//! Snowfall Fractal - Koch snowflake mesh generation
//!
//! Pure, deterministic triangle-soup generation: a fixed equilateral base
//! triangle whose edges are recursively subdivided into outward/inward peak
//! triangle pairs. No randomness, no renderer coupling — the output is a flat
//! vertex list a renderer can upload as-is.

mod koch;
mod mesh;

pub use koch::{generate, snowflake_mesh, triangles_per_edge};
pub use mesh::FlakeMesh;
