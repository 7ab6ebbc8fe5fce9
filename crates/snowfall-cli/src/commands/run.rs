//! `snowfall run` - headless simulation with periodic stats

use anyhow::Result;
use snowfall_core::{mat4_mul, Mat4, MAT4_IDENTITY};
use snowfall_sim::{RenderSnapshot, SimConfig, Simulation};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Wall-clock pacing for --realtime: one simulation tick per 60th of a second
const TICK_INTERVAL: Duration = Duration::from_micros(16_667);

/// Half-width of the horizontal spawn band the clip matrix maps to [-1, 1]
const SCENE_HALF_WIDTH: f32 = 1.5;

pub struct RunArgs {
    pub ticks: u64,
    pub seed: Option<u32>,
    pub config: Option<PathBuf>,
    pub report_every: u64,
    pub realtime: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };

    let mut sim = match args.seed {
        Some(seed) => Simulation::with_seed(config, seed)?,
        None => Simulation::new(config)?,
    };

    println!(
        "[sim] Seeded {} flake(s), depth {} mesh ({} triangles each)",
        sim.population(),
        sim.config().fractal_depth,
        sim.field().mesh().triangle_count()
    );

    let mut deadline = Instant::now() + TICK_INTERVAL;
    for tick in 1..=args.ticks {
        let snapshot = sim.tick();
        maybe_report(&sim, &snapshot, tick, args.report_every);

        if args.realtime {
            // A late tick shortens the next wait instead of shifting the
            // whole schedule
            if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
                std::thread::sleep(wait);
            }
            deadline += TICK_INTERVAL;
        }
    }

    println!(
        "[sim] Done: {} tick(s), final population {} (cap {})",
        sim.ticks(),
        sim.population(),
        sim.config().max_population
    );
    Ok(())
}

fn maybe_report(sim: &Simulation, snapshot: &RenderSnapshot, tick: u64, report_every: u64) {
    if report_every > 0 && tick % report_every == 0 {
        println!(
            "[sim] tick {:>6}  population {:>4}  visible {:>4}  wind {:+.4}  accel {:+.6}  landed {}  spawned {}",
            tick,
            sim.population(),
            visible_count(snapshot),
            sim.environment().current_wind(),
            sim.environment().current_acceleration(),
            sim.last_stats().landed,
            sim.last_stats().spawned,
        );
    }
}

/// Stand-in for the renderer's `projection * view`: squeezes the spawn band
/// horizontally onto the unit clip square, camera at the origin
fn clip_matrix() -> Mat4 {
    let mut m = MAT4_IDENTITY;
    m[0][0] = 1.0 / SCENE_HALF_WIDTH;
    m
}

/// How many snapshot flakes land inside the clip square after the full
/// `projection * view * model` composition (wind can blow flakes out the sides)
fn visible_count(snapshot: &RenderSnapshot) -> usize {
    let pv = clip_matrix();
    snapshot
        .iter()
        .filter(|entry| {
            let clip = mat4_mul(&pv, &entry.model);
            // Column 3 carries the transformed flake origin
            (-1.0..=1.0).contains(&clip[3][0]) && (-1.0..=1.0).contains(&clip[3][1])
        })
        .count()
}
