//! The flake field: owns the particle collection, applies environment
//! readings, culls landed flakes, and replenishes under the population cap

use crate::config::SimConfig;
use crate::environment::EnvReading;
use crate::flake::Snowflake;
use crate::rng::SimRng;
use snowfall_core::Mat4;
use snowfall_fractal::{snowflake_mesh, FlakeMesh};
use std::sync::Arc;

/// One drawable flake for the renderer: a read-only mesh handle plus the
/// model matrix to combine with external `projection * view`.
pub struct SnapshotEntry {
    pub mesh: Arc<FlakeMesh>,
    pub model: Mat4,
}

/// Per-tick output consumed by the renderer, rebuilt every tick
pub type RenderSnapshot = Vec<SnapshotEntry>;

/// What one tick did, for hosts that report stats
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickStats {
    pub landed: u32,
    pub spawned: u32,
}

/// The particle system. Flake order in the collection is irrelevant;
/// `len() <= max_population` holds at every spawn point.
pub struct Snowfield {
    flakes: Vec<Snowflake>,
    /// One immutable mesh shared by every flake of this field
    mesh: Arc<FlakeMesh>,
    last_stats: TickStats,
}

impl Snowfield {
    /// Create an empty field, generating the shared mesh at the configured
    /// recursion depth
    pub fn new(config: &SimConfig) -> Self {
        Self {
            flakes: Vec::with_capacity(config.max_population.min(1024)),
            mesh: Arc::new(snowflake_mesh(config.fractal_depth)),
            last_stats: TickStats::default(),
        }
    }

    /// Append `n` fresh flakes, capped at `max_population`. Called once at
    /// startup.
    pub fn seed(&mut self, n: usize, config: &SimConfig, rng: &mut SimRng) {
        for _ in 0..n {
            if self.flakes.len() >= config.max_population {
                break;
            }
            self.flakes
                .push(Snowflake::spawn(Arc::clone(&self.mesh), config, rng));
        }
    }

    /// Advance every flake one tick under the given environment reading,
    /// cull flakes that fell past the floor, replenish, and return the
    /// snapshot of everything now alive.
    pub fn tick(
        &mut self,
        env: &EnvReading,
        config: &SimConfig,
        rng: &mut SimRng,
    ) -> RenderSnapshot {
        for flake in &mut self.flakes {
            // Wind pushes small flakes relatively harder, with damped
            // feedback from the flake's own previous drift
            flake.horizontal_velocity = 0.7 * flake.horizontal_velocity
                + env.wind / flake.scale * config.min_scale * config.max_scale;
            flake.position.x += flake.horizontal_velocity;
            flake.position.y -= flake.fall_speed + env.acceleration;
            flake.rotation_angle += flake.rotation_rate;
        }

        // Mark-then-compact: never erase while iterating forward
        let before = self.flakes.len();
        let floor_y = config.floor_y;
        self.flakes.retain(|flake| flake.position.y >= floor_y);
        let landed = (before - self.flakes.len()) as u32;

        let mut spawned = 0u32;
        // One chance spawn per tick, independent of how many landed
        if rng.chance(config.spawn_probability) && self.flakes.len() < config.max_population {
            self.flakes
                .push(Snowflake::spawn(Arc::clone(&self.mesh), config, rng));
            spawned += 1;
        }
        // One replacement per landed flake, each gated by the cap
        for _ in 0..landed {
            if self.flakes.len() < config.max_population {
                self.flakes
                    .push(Snowflake::spawn(Arc::clone(&self.mesh), config, rng));
                spawned += 1;
            }
        }

        self.last_stats = TickStats { landed, spawned };
        self.snapshot()
    }

    /// Snapshot of the current flakes without advancing the simulation
    pub fn snapshot(&self) -> RenderSnapshot {
        self.flakes
            .iter()
            .map(|flake| SnapshotEntry {
                mesh: Arc::clone(&flake.mesh),
                model: flake.transform().to_matrix(),
            })
            .collect()
    }

    pub fn population(&self) -> usize {
        self.flakes.len()
    }

    /// The shared mesh every flake of this field draws with
    pub fn mesh(&self) -> &Arc<FlakeMesh> {
        &self.mesh
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Read access for hosts and tests
    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Mutable access for scripted test scenarios
    #[cfg(test)]
    pub(crate) fn flakes_mut(&mut self) -> &mut Vec<Snowflake> {
        &mut self.flakes
    }
}
