//! Simulation configuration (defaults match the production scene, overridable
//! from TOML)

use serde::{Deserialize, Serialize};
use snowfall_core::{Result, SnowfallError};
use std::path::Path;

/// All tunables for one simulation. Fixed at construction time; the
/// simulation never reconfigures itself mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Flakes seeded at startup
    pub initial_population: usize,
    /// Hard cap enforced at every spawn point
    pub max_population: usize,
    /// Flake scale range, drawn once per flake
    pub min_scale: f32,
    pub max_scale: f32,
    /// Wind target redraw range
    pub wind_min: f32,
    pub wind_max: f32,
    /// Per-tick wind smoothing step
    pub wind_step: f32,
    /// Gravity target redraw range upper bound
    pub gravity_min: f32,
    /// Per-tick acceleration step
    pub gravity_step: f32,
    /// Chance of one extra spawn per tick
    pub spawn_probability: f32,
    /// Flakes below this y are culled
    pub floor_y: f32,
    /// New flakes start at this y
    pub spawn_y: f32,
    /// Koch recursion depth for the shared flake mesh
    pub fractal_depth: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_population: 30,
            max_population: 800,
            min_scale: 0.01,
            max_scale: 0.03,
            wind_min: -0.15,
            wind_max: 0.2,
            wind_step: 0.001,
            gravity_min: 0.005,
            gravity_step: 0.00002,
            spawn_probability: 0.2,
            floor_y: -1.0,
            spawn_y: 0.9,
            fractal_depth: 2,
        }
    }
}

impl SimConfig {
    /// Parse a config from a TOML string. Missing fields take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check invariants the simulation relies on. A bad config is a setup
    /// error, not something to limp along with.
    pub fn validate(&self) -> Result<()> {
        if self.min_scale <= 0.0 {
            return Err(SnowfallError::ValidationError(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(SnowfallError::ValidationError(format!(
                "min_scale ({}) exceeds max_scale ({})",
                self.min_scale, self.max_scale
            )));
        }
        if self.wind_min > self.wind_max {
            return Err(SnowfallError::ValidationError(format!(
                "wind_min ({}) exceeds wind_max ({})",
                self.wind_min, self.wind_max
            )));
        }
        if self.wind_step <= 0.0 || self.gravity_step <= 0.0 {
            return Err(SnowfallError::ValidationError(
                "wind_step and gravity_step must be positive".to_string(),
            ));
        }
        if self.gravity_min < 0.0 {
            return Err(SnowfallError::ValidationError(format!(
                "gravity_min must be non-negative, got {}",
                self.gravity_min
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(SnowfallError::ValidationError(format!(
                "spawn_probability must be in [0, 1], got {}",
                self.spawn_probability
            )));
        }
        if self.spawn_y <= self.floor_y {
            return Err(SnowfallError::ValidationError(format!(
                "spawn_y ({}) must sit above floor_y ({})",
                self.spawn_y, self.floor_y
            )));
        }
        if self.fractal_depth < -1 {
            return Err(SnowfallError::ValidationError(format!(
                "fractal_depth must be >= -1, got {}",
                self.fractal_depth
            )));
        }
        if self.fractal_depth > 8 {
            // T(8) per edge is ~50M triangles; nothing sane lives up there
            return Err(SnowfallError::ValidationError(format!(
                "fractal_depth {} is unreasonably deep (max 8)",
                self.fractal_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_population, 30);
        assert_eq!(config.max_population, 800);
        assert_eq!(config.fractal_depth, 2);
    }

    #[test]
    fn parse_from_toml_with_partial_overrides() {
        let config = SimConfig::from_toml_str(
            r#"
max_population = 100
spawn_probability = 0.5
fractal_depth = 3
"#,
        )
        .unwrap();
        assert_eq!(config.max_population, 100);
        assert!((config.spawn_probability - 0.5).abs() < 1e-6);
        assert_eq!(config.fractal_depth, 3);
        // Untouched fields keep defaults
        assert!((config.wind_max - 0.2).abs() < 1e-6);
    }

    #[test]
    fn rejects_inverted_scale_range() {
        let err = SimConfig::from_toml_str("min_scale = 0.5\nmax_scale = 0.1");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(SimConfig::from_toml_str("flake_count = 10").is_err());
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(SimConfig::from_toml_str("spawn_probability = 1.5").is_err());
    }

    #[test]
    fn zero_population_is_allowed() {
        // Visually empty but not an error
        let config = SimConfig::from_toml_str("max_population = 0").unwrap();
        assert_eq!(config.max_population, 0);
    }
}
