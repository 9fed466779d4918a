//! Liftwell Simulator CLI
//!
//! Run the discrete-tick elevator simulation and report conveyance times.

use clap::Parser;
use liftwell_core::SweepPolicy;
use liftwell_env::{ConsoleReporter, JsonReporter, Reporter, SimProperties};
use liftwell_sim::{SimEngine, StatsPolicy};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Liftwell discrete-tick elevator simulator
#[derive(Parser, Debug)]
#[command(name = "liftwell-sim")]
#[command(about = "Run the multi-elevator building simulation", long_about = None)]
struct Args {
    /// Path to the JSON configuration (missing file = built-in defaults)
    #[arg(short, long, default_value = "liftwell.json")]
    config: PathBuf,

    /// Seed for the simulation's generator (0 = derive from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Elevator behavior at boundary floors (bounce, one-way)
    #[arg(long, default_value = "bounce")]
    sweep: String,

    /// When conveyance times are sampled (at-delivery, per-tick)
    #[arg(long, default_value = "at-delivery")]
    stats: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON report on stdout instead of the console report
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if !args.json {
        info!("Liftwell Simulator v0.1.0");
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    let sweep: SweepPolicy = args.sweep.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available sweep policies: bounce, one-way");
        std::process::exit(1);
    });

    let stats: StatsPolicy = args.stats.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available statistics policies: at-delivery, per-tick");
        std::process::exit(1);
    });

    // Determine seed
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    } else {
        args.seed
    };

    // A malformed or invalid config file is fatal; a missing one is not
    let props = match SimProperties::load_or_default(&args.config) {
        Ok(props) => props,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let mut engine = SimEngine::new(&props, seed)
        .with_sweep_policy(sweep)
        .with_stats_policy(stats);
    let report = engine.run();

    let reporter: Box<dyn Reporter> = if args.json {
        Box::new(JsonReporter)
    } else {
        Box::new(ConsoleReporter)
    };
    reporter.deliver(&report);
}
