use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// machine-health: predictive-maintenance monitor
///
/// Reads temperature, pressure and vibration sensors, logs every reading,
/// raises alerts on threshold breaches and predicts required maintenance.
#[derive(Parser, Debug)]
#[command(name = "machine-health")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not write readings to the log file
    #[arg(long, global = true)]
    pub no_log: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Monitor continuously (default)
    #[command(alias = "r")]
    Run {
        /// Stop after this many cycles
        #[arg(short = 'n', long)]
        cycles: Option<u64>,

        /// Milliseconds between cycles
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Ask whether to continue after every N cycles (0 disables)
        #[arg(short, long)]
        prompt_every: Option<u64>,

        /// Seed for reproducible simulated readings
        #[arg(long)]
        seed: Option<u64>,

        /// Output one JSON report per line
        #[arg(long)]
        json: bool,
    },

    /// Run a single monitoring cycle
    #[command(alias = "o")]
    Once {
        /// Seed for reproducible simulated readings
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    #[command(alias = "c")]
    Config,
}
