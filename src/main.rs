//! fixturebench headless runner.
//!
//! Loads a fixture scene, drives it for a number of ticks and prints a JSON
//! summary of the final behavior state on stdout.
//!
//! Signals come from, in order of preference:
//! - a replay script (`--replay`)
//! - a seeded random soak generator (`--soak-seed`)
//! - nothing, in which case only the timers and animations advance
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 600 --soak-seed 42
//! RUST_LOG=debug cargo run -- --replay replays/press_and_hover.json
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use fixturebench::error::FixtureError;
use fixturebench::replay::{ReplayScript, SoakGenerator};
use fixturebench::report::{install_tally, summarize};
use fixturebench::resources::benchconfig::BenchConfig;
use fixturebench::resources::frameevents::FrameEvents;
use fixturebench::resources::worldtime::WorldTime;
use fixturebench::scene::{SceneDescription, spawn_scene};
use fixturebench::tick::BehaviorScheduler;

/// Headless driver for the interactive fixture behavior engine.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file (default: ./fixturebench.ini, if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON scene description. The built-in scene is used when omitted.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// JSON replay script feeding per-tick signals.
    #[arg(long, value_name = "PATH", conflicts_with = "soak_seed")]
    replay: Option<PathBuf>,

    /// Generate random signals from this seed.
    #[arg(long, value_name = "N")]
    soak_seed: Option<u64>,

    /// Number of ticks to run (overrides the config).
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,

    /// Seconds per tick (overrides the config).
    #[arg(long, value_name = "S")]
    dt: Option<f32>,

    /// Write the scene description as JSON and exit.
    #[arg(long, value_name = "PATH")]
    dump_scene: Option<PathBuf>,
}

enum SignalSource {
    Idle,
    Replay(ReplayScript),
    Soak(SoakGenerator),
}

impl SignalSource {
    fn events_for(&mut self, tick: u64, world: &World) -> FrameEvents {
        match self {
            SignalSource::Idle => FrameEvents::default(),
            SignalSource::Replay(script) => script.events_for(tick, world),
            SignalSource::Soak(generator) => generator.next_events(world),
        }
    }
}

fn load_config(cli: &Cli) -> Result<BenchConfig, FixtureError> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = BenchConfig::with_path(path);
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = BenchConfig::new();
            if config.config_path.exists() {
                config.load_from_file()?;
            }
            config
        }
    };
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(FixtureError::NonPositiveInterval {
                what: "tick",
                value: dt,
            });
        }
        config.dt = dt;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), FixtureError> {
    let scene = match &cli.scene {
        Some(path) => SceneDescription::load_from_file(path)?,
        None => SceneDescription::builtin(),
    };

    // Early-exit: dump the scene and quit
    if let Some(path) = &cli.dump_scene {
        scene.save_to_file(path)?;
        println!("Scene written to {}", path.display());
        return Ok(());
    }

    let config = load_config(&cli)?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    spawn_scene(&mut world, &scene, &config)?;
    install_tally(&mut world);
    let mut scheduler = BehaviorScheduler::new(&mut world)?;

    let mut source = match (&cli.replay, cli.soak_seed) {
        (Some(path), _) => SignalSource::Replay(ReplayScript::load_from_file(path)?),
        (None, Some(seed)) => SignalSource::Soak(SoakGenerator::new(seed, &world)),
        (None, None) => SignalSource::Idle,
    };

    info!(
        "Running {} ticks at dt={} ({} fixtures)",
        config.ticks,
        config.dt,
        scene.fixture_count()
    );

    for tick in 0..config.ticks {
        let events = source.events_for(tick, &world);
        scheduler.tick(&mut world, config.dt, events);

        if config.summary_every > 0 && (tick + 1) % config.summary_every == 0 {
            let summary = summarize(&world);
            info!(
                "tick {}: {} cubes pressed, {} volumes occupied, {} items alive",
                tick + 1,
                summary.pressed_cubes(),
                summary.occupied_volumes(),
                summary.alive_items()
            );
        }
    }

    let summary = summarize(&world);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
