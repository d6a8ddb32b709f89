//! Button Game entry point
//!
//! Runs a headless session driven by the autopilot and prints the final
//! score. Rendering and real mouse input are provided by a frontend; this
//! binary exercises the game loop on its own.
//!
//! Usage:
//!   cargo run -- --seed 42
//!   RUST_LOG=debug cargo run -- --realtime --dump-frames frames.jsonl

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use button_game::platform::{AutoPilot, Clock, ManualClock, SystemClock};
use button_game::view::{JsonLinesPresenter, LogPresenter, Presenter};
use button_game::{Session, SessionSummary, Settings, SettingsError};

#[derive(Parser)]
#[command(name = "button-game")]
#[command(about = "Click the boxes before their timers run out")]
struct Args {
    /// JSON settings file (defaults are used for missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Pace frames with the wall clock instead of simulating time
    #[arg(long)]
    realtime: bool,

    /// Autopilot delay between clicks (ms)
    #[arg(long, default_value_t = 650)]
    reaction_ms: u64,

    /// Stop after this many frames
    #[arg(long)]
    max_frames: Option<u64>,

    /// Write every frame snapshot as JSON lines to this file
    #[arg(long)]
    dump_frames: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to create frame dump {path}: {source}")]
    Dump {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Button Game starting...");

    match run(Args::parse()) {
        Ok(summary) => {
            println!("Player score: {}", summary.score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<SessionSummary, AppError> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(time_seed);

    let mut pilot = AutoPilot::new(args.reaction_ms);
    if let Some(max) = args.max_frames {
        pilot = pilot.with_max_frames(max);
    }

    let summary = match &args.dump_frames {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::Dump {
                path: path.display().to_string(),
                source,
            })?;
            let presenter = JsonLinesPresenter::new(BufWriter::new(file));
            play(&args, settings, seed, pilot, presenter)
        }
        None => play(&args, settings, seed, pilot, LogPresenter::default()),
    };

    log::info!(
        "Session ended ({:?}) after {} frames, seed {}",
        summary.end,
        summary.frames,
        summary.seed
    );
    Ok(summary)
}

fn play<P: Presenter>(
    args: &Args,
    settings: Settings,
    seed: u64,
    pilot: AutoPilot,
    presenter: P,
) -> SessionSummary {
    if args.realtime {
        run_with_clock(settings, seed, SystemClock::new(), pilot, presenter)
    } else {
        let clock = ManualClock::with_step(0, settings.frame_ms());
        run_with_clock(settings, seed, clock, pilot, presenter)
    }
}

fn run_with_clock<C: Clock, P: Presenter>(
    settings: Settings,
    seed: u64,
    clock: C,
    pilot: AutoPilot,
    presenter: P,
) -> SessionSummary {
    Session::new(settings, seed, clock, pilot, presenter).run()
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
