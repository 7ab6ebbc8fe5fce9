//! Simulation coordinator
//!
//! Owns all mutable state (config, RNG, environment, field) in one struct so
//! multiple independent simulations can coexist. Enforces the per-tick
//! ordering: environment advances first, then the field consumes its reading.

use crate::config::SimConfig;
use crate::environment::Environment;
use crate::field::{RenderSnapshot, Snowfield, TickStats};
use crate::rng::SimRng;
use snowfall_core::Result;

pub struct Simulation {
    config: SimConfig,
    rng: SimRng,
    environment: Environment,
    field: Snowfield,
    ticks: u64,
}

impl Simulation {
    /// Build a simulation with a time-based seed. Validates the config and
    /// seeds the initial population.
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::build(config, SimRng::from_entropy())
    }

    /// Build a fully deterministic simulation from an explicit seed
    pub fn with_seed(config: SimConfig, seed: u32) -> Result<Self> {
        Self::build(config, SimRng::new(seed))
    }

    fn build(config: SimConfig, mut rng: SimRng) -> Result<Self> {
        config.validate()?;
        let mut field = Snowfield::new(&config);
        field.seed(config.initial_population, &config, &mut rng);
        Ok(Self {
            config,
            rng,
            environment: Environment::new(),
            field,
            ticks: 0,
        })
    }

    /// Advance one frame: environment first, then the flake field. Returns
    /// the snapshot the renderer should draw this frame.
    pub fn tick(&mut self) -> RenderSnapshot {
        let reading = self.environment.advance(&self.config, &mut self.rng);
        let snapshot = self.field.tick(&reading, &self.config, &mut self.rng);
        self.ticks += 1;
        snapshot
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn field(&self) -> &Snowfield {
        &self.field
    }

    pub fn population(&self) -> usize {
        self.field.population()
    }

    pub fn last_stats(&self) -> TickStats {
        self.field.last_stats()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
