//! Snowfall CLI - Headless driver for the snow simulation

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, mesh, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snowfall")]
#[command(about = "Koch-snowflake snow simulation, headless", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and report per-interval stats
    Run {
        /// Number of ticks to simulate
        #[arg(long, default_value = "600")]
        ticks: u64,

        /// RNG seed for a reproducible run (time-seeded if omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Path to a TOML config file (defaults used if omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print stats every N ticks
        #[arg(long, default_value = "100")]
        report_every: u64,

        /// Pace ticks against the wall clock at 60 Hz instead of running flat out
        #[arg(long)]
        realtime: bool,
    },

    /// Generate a flake mesh and print its stats or export it
    Mesh {
        /// Koch recursion depth
        #[arg(long, default_value = "2")]
        depth: i32,

        /// Write the mesh to a Wavefront OBJ file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file to load and echo back merged with defaults
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            ticks,
            seed,
            config,
            report_every,
            realtime,
        } => run::run(run::RunArgs {
            ticks,
            seed,
            config,
            report_every,
            realtime,
        }),
        Commands::Mesh { depth, output } => mesh::run(depth, output.as_deref()),
        Commands::Config { path } => config::run(path.as_deref()),
    }
}
