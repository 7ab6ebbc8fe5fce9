//! Snowfall Core - Foundational types for the Snowfall simulation
//!
//! This crate provides the types all other Snowfall crates depend on:
//! - `Vec3` - Spatial value type
//! - `Transform` - Per-flake model transform (translate / spin / scale)
//! - `Mat4` + `mat4_mul` - Column-major matrix plumbing for renderers
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, SnowfallError};
pub use types::{mat4_mul, Mat4, Transform, Vec3, MAT4_IDENTITY};
