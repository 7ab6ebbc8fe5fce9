//! Snowfall Sim - Falling-snow particle simulation
//!
//! Provides the per-tick simulation core a renderer consumes:
//! - Stochastic wind/gravity environment (random-walk targets, smoothed output)
//! - Bounded flake population with spawn / cull / replenish lifecycle
//! - One shared immutable Koch mesh per simulation, only transforms vary
//! - `RenderSnapshot` of (mesh handle, model matrix) pairs every tick
//!
//! All state lives in `Simulation`; nothing is global, so independent
//! simulations can run side by side (and tests stay deterministic via
//! explicit seeds).

pub mod config;
pub mod environment;
pub mod field;
pub mod flake;
pub mod rng;
pub mod simulation;

pub use config::SimConfig;
pub use environment::{EnvReading, Environment};
pub use field::{RenderSnapshot, SnapshotEntry, Snowfield, TickStats};
pub use flake::Snowflake;
pub use rng::SimRng;
pub use simulation::Simulation;
