//! One falling snowflake: shared mesh + kinematic state

use crate::config::SimConfig;
use crate::rng::SimRng;
use snowfall_core::{Transform, Vec3};
use snowfall_fractal::FlakeMesh;
use std::sync::Arc;

/// Horizontal spawn band
const SPAWN_X_MIN: f32 = -1.5;
const SPAWN_X_MAX: f32 = 1.5;
/// Initial spin rate range (radians per tick)
const SPIN_MIN: f32 = -2.0;
const SPIN_MAX: f32 = 2.0;
/// Initial horizontal drift range
const DRIFT_MIN: f32 = -0.005;
const DRIFT_MAX: f32 = 0.01;
/// Fall speed range, fixed per flake
const FALL_MIN: f32 = 0.002;
const FALL_MAX: f32 = 0.01;

/// A single simulated flake. All flakes of one simulation share the same
/// immutable mesh; only the kinematic state here varies.
pub struct Snowflake {
    pub mesh: Arc<FlakeMesh>,
    /// World position; z stays 0 (layering is the renderer's business)
    pub position: Vec3,
    /// Accumulated spin in radians
    pub rotation_angle: f32,
    /// Spin added each tick, fixed at spawn
    pub rotation_rate: f32,
    /// Uniform scale, fixed at spawn
    pub scale: f32,
    /// Wind-coupled horizontal velocity, mutated every tick
    pub horizontal_velocity: f32,
    /// Downward speed, fixed at spawn
    pub fall_speed: f32,
}

impl Snowflake {
    /// Spawn a fresh flake at the top of the scene with randomized kinematics
    pub fn spawn(mesh: Arc<FlakeMesh>, config: &SimConfig, rng: &mut SimRng) -> Self {
        Self {
            mesh,
            position: Vec3::new(rng.range(SPAWN_X_MIN, SPAWN_X_MAX), config.spawn_y, 0.0),
            rotation_angle: 0.0,
            rotation_rate: rng.range(SPIN_MIN, SPIN_MAX),
            scale: rng.range(config.min_scale, config.max_scale),
            horizontal_velocity: rng.range(DRIFT_MIN, DRIFT_MAX),
            fall_speed: rng.range(FALL_MIN, FALL_MAX),
        }
    }

    /// Model transform for the renderer: translate, then spin, then scale
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation_angle, self.scale)
    }
}
