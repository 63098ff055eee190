//! Headless autopilot simulator CLI.
//!
//! Plays seeded sessions without a terminal UI and prints score statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                       # 100 random runs
//!   cargo run --bin simulate -- -n 20 --seed 42    # Reproducible
//!   cargo run --bin simulate -- --seed 7 --json    # Also save a JSON report

use clap::Parser;
use flappy::simulator::{run_simulation, SimConfig};
use flappy::utils::logging::init_stderr_logging;
use flappy::utils::persistence::load_config;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(version, about = "Run the flappy autopilot headless and report scores", long_about = None)]
struct Cli {
    /// Number of sessions to play
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Seed of the first run (run i uses seed + i)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Frames per run before giving up
    #[arg(short, long, default_value_t = 36_000)]
    ticks: u64,

    /// Simulated frame length in ms
    #[arg(long, default_value_t = 16.0)]
    frame_ms: f64,

    /// Bot flaps when the bird sinks within this many px of the bottom pipe
    #[arg(long, default_value_t = 30.0)]
    tap_margin: f64,

    /// Tuning file (defaults to ~/.flappy/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also save the report as JSON
    #[arg(long)]
    json: bool,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_stderr_logging(&cli.log_level);

    let flight = match load_config(cli.config.as_deref()) {
        Ok(flight) => flight,
        Err(e) => {
            warn!(error = %e, "falling back to default tuning");
            Default::default()
        }
    };

    let config = SimConfig {
        num_runs: cli.runs,
        seed: cli.seed,
        max_ticks_per_run: cli.ticks,
        frame_ms: cli.frame_ms,
        tap_margin: cli.tap_margin,
        flight,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              FLAPPY AUTOPILOT SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Frame:          {} ms", config.frame_ms);
    println!(
        "  Viewport:       {} x {}",
        config.flight.viewport_width, config.flight.viewport_height
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if cli.json {
        let filename = format!(
            "flappy_sim_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        info!(path = %filename, "saved JSON report");
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
