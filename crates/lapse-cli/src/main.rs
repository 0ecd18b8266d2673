//! `lapse` — plan a timelapse exposure schedule and print it as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Default plan: 24 h into a 60 s / 30 fps video, 30 s lead-in
//! lapse
//!
//! # 8 hours into a 45 s / 24 fps video named "harbor"
//! lapse --span 8 --duration 45 --fps 24 --name harbor
//!
//! # Re-emit a previously saved plan file as one compact JSON line
//! # (event order is preserved as-is from the file)
//! lapse --input plan.json
//! ```
//!
//! The plan is a single JSON line on stdout; diagnostics go to stderr so the
//! output pipes cleanly into other tools.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lapse_core::{time, EpochMillis};
use lapse_plan::{generate, load_plan_json, write_plan_json, Recipe};

/// Timelapse exposure schedule planner
#[derive(Parser)]
#[command(name = "lapse")]
#[command(version)]
#[command(about = "Plan a timelapse capture schedule and print it as a JSON array")]
struct Cli {
    /// Hours the timelapse will run for, starting now
    #[arg(short, long, default_value_t = 24)]
    span: u32,

    /// Duration of the assembled timelapse video, in seconds
    #[arg(short, long, default_value_t = 60)]
    duration: u32,

    /// Frame rate of the assembled timelapse video, in frames per second
    #[arg(short, long, default_value_t = 30)]
    fps: u32,

    /// Seconds to hold before the first exposure
    #[arg(long, default_value_t = 30)]
    delay: u32,

    /// Name of the timelapse; also serves as the directory name for frames
    #[arg(short, long, default_value = "timelapse")]
    name: String,

    /// Path of a JSON plan file (array of {"name", "ts"} objects).
    /// Overrides --span, --duration, --fps, and --delay
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Anchor the plan at this epoch-millisecond instant instead of the
    /// current wall-clock time (deterministic output, useful in scripts)
    #[arg(long)]
    start: Option<i64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics on stderr only — stdout carries exactly one JSON line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let plan = match &cli.input {
        Some(path) => {
            let plan = load_plan_json(path)
                .with_context(|| format!("failed to load plan from {}", path.display()))?;
            info!(events = plan.len(), path = %path.display(), "loaded plan file");
            plan
        }
        None => {
            let recipe = Recipe {
                input_hours:    cli.span,
                output_seconds: cli.duration,
                output_fps:     cli.fps,
                delay_seconds:  cli.delay,
                label:          cli.name.clone(),
            };
            let start = cli.start.map(EpochMillis).unwrap_or_else(time::now);
            let spec = recipe.schedule_spec(start).context("invalid plan parameters")?;
            info!(
                frames = spec.frame_count,
                interval_millis = spec.interval_millis,
                start = %spec.start,
                "derived schedule"
            );
            generate(&spec).context("plan generation failed")?
        }
    };

    write_plan_json(std::io::stdout().lock(), &plan).context("failed to write plan")?;
    Ok(())
}
