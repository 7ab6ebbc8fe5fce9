//! Spatial and common types

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(arr: [f32; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other) * 0.5
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

/// A 4x4 column-major matrix, laid out for direct upload as a shader uniform
pub type Mat4 = [[f32; 4]; 4];

/// The 4x4 identity matrix
pub const MAT4_IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// A flake model transform: translation, spin around the z axis, uniform scale.
///
/// Composition order is `translate * rotate_z * scale`, so the renderer's final
/// matrix is `projection * view * to_matrix()`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation around the z axis in radians
    pub rotation_z: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_z: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub const fn new(position: Vec3, rotation_z: f32, scale: f32) -> Self {
        Self {
            position,
            rotation_z,
            scale,
        }
    }

    /// Convert to a 4x4 transformation matrix (column-major)
    pub fn to_matrix(&self) -> Mat4 {
        let (s, c) = self.rotation_z.sin_cos();
        let k = self.scale;

        [
            [c * k, s * k, 0.0, 0.0],
            [-s * k, c * k, 0.0, 0.0],
            [0.0, 0.0, k, 0.0],
            [self.position.x, self.position.y, self.position.z, 1.0],
        ]
    }
}

/// Multiply two 4x4 column-major matrices
pub fn mat4_mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut result = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);

        let sum = v1 + v2;
        assert_eq!(sum, Vec3::new(5.0, 7.0, 9.0));

        let diff = v2 - v1;
        assert_eq!(diff, Vec3::new(3.0, 3.0, 3.0));

        let scaled = v1 * 2.0;
        assert_eq!(scaled, Vec3::new(2.0, 4.0, 6.0));

        let mid = v1.midpoint(&v2);
        assert_eq!(mid, Vec3::new(2.5, 3.5, 4.5));
    }

    #[test]
    fn test_transform_identity_matrix() {
        let t = Transform::default();
        assert_eq!(t.to_matrix(), MAT4_IDENTITY);
    }

    #[test]
    fn test_transform_translates_origin() {
        let t = Transform::new(Vec3::new(0.3, -0.7, 0.0), 0.0, 1.0);
        let m = t.to_matrix();
        // Column 3 carries the translation
        assert_eq!(m[3], [0.3, -0.7, 0.0, 1.0]);
    }

    #[test]
    fn test_transform_scale_then_rotate() {
        use std::f32::consts::FRAC_PI_2;
        // Quarter turn with scale 2: local +x maps to world +y scaled
        let t = Transform::new(Vec3::ZERO, FRAC_PI_2, 2.0);
        let m = t.to_matrix();
        assert!((m[0][0]).abs() < 1e-6);
        assert!((m[0][1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat4_mul_identity() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), 0.5, 0.25);
        let m = t.to_matrix();
        assert_eq!(mat4_mul(&MAT4_IDENTITY, &m), m);
        assert_eq!(mat4_mul(&m, &MAT4_IDENTITY), m);
    }
}
