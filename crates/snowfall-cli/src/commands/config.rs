//! `snowfall config` - echo the effective configuration

use anyhow::Result;
use snowfall_sim::SimConfig;
use std::path::Path;

pub fn run(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => SimConfig::load(p)?,
        None => SimConfig::default(),
    };
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
