//! skyshield: headless SKYSHIELD session driven by the autopilot.
//!
//! Usage:
//!   skyshield [--seed N] [--frames N] [--width W] [--height H]

use std::process;
use std::str::FromStr;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skyshield_app::autopilot::{self, LowestRocketPilot};
use skyshield_app::{AppError, Result};
use skyshield_core::types::Viewport;
use skyshield_sim::SimConfig;

/// Fixed frame length used for headless runs.
const HEADLESS_FRAME_MS: f64 = 16.0;

#[derive(Debug)]
struct Options {
    seed: u64,
    frames: u64,
    width: f64,
    height: f64,
}

impl Default for Options {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            seed: 42,
            frames: 36_000,
            width: viewport.width,
            height: viewport.height,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if let Err(err) = run(&args) {
        error!("{err}");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "skyshield: headless SKYSHIELD session\n\
         \n\
           --seed <N>     RNG seed (default: 42)\n\
           --frames <N>   Maximum frames to run (default: 36000)\n\
           --width <W>    Viewport width in pixels (default: 800)\n\
           --height <H>   Viewport height in pixels (default: 600)\n"
    );
}

fn run(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    let viewport = Viewport::new(options.width, options.height);
    if !viewport.is_usable() {
        return Err(AppError::InvalidArgument {
            flag: "--width/--height".into(),
            message: "viewport must be finite and positive".into(),
        });
    }

    let config = SimConfig {
        seed: options.seed,
        viewport,
        ..Default::default()
    };
    let mut pilot = LowestRocketPilot::default();
    let report = autopilot::run_session(config, &mut pilot, options.frames, HEADLESS_FRAME_MS);
    let snap = &report.final_snapshot;

    info!(
        state = ?snap.state,
        score = snap.score,
        level = snap.level,
        frames = report.frames_run,
        cities = snap.live_cities(),
        batteries = snap.live_batteries(),
        ammo = snap.total_ammo(),
        "session finished"
    );
    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next().ok_or_else(|| AppError::InvalidArgument {
            flag: flag.clone(),
            message: "missing value".into(),
        })?;
        match flag.as_str() {
            "--seed" => options.seed = parse_value(flag, value)?,
            "--frames" => options.frames = parse_value(flag, value)?,
            "--width" => options.width = parse_value(flag, value)?,
            "--height" => options.height = parse_value(flag, value)?,
            other => {
                return Err(AppError::InvalidArgument {
                    flag: other.to_string(),
                    message: "unknown flag".into(),
                })
            }
        }
    }
    Ok(options)
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| AppError::InvalidArgument {
        flag: flag.to_string(),
        message: e.to_string(),
    })
}
