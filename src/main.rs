use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use machine_health::application::config::AppConfig;
use machine_health::application::services::monitor::HealthMonitor;
use machine_health::application::services::setup::{build_monitor, log_sink_for};
use machine_health::domain::ports::alert_channel::AlertChannel;
use machine_health::infrastructure::notifications::recording::RecordingAlertChannel;
use machine_health::infrastructure::sensors::factory::SensorFactory;
use machine_health::presentation::cli::app::{Cli, Commands};
use machine_health::presentation::cli::commands::config::run_show_config;
use machine_health::presentation::cli::commands::once::run_once;
use machine_health::presentation::cli::commands::run::{run_monitoring, RunOptions};
use machine_health::presentation::cli::prompt::StdinPrompt;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  MACHINE HEALTH · Predictive Maintenance".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    // Reports go to stdout; keep diagnostics out of them
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct Assembled {
    monitor: HealthMonitor,
    /// Drained once per cycle into the report
    alerts: Arc<RecordingAlertChannel>,
    log_path: Option<PathBuf>,
}

/// Wire sink, alert buffer and sensors.
fn assemble(config: &AppConfig, seed: Option<u64>) -> anyhow::Result<Assembled> {
    let (sink, log_path) = log_sink_for(&config.log);
    let alerts = Arc::new(RecordingAlertChannel::new());
    let channel: Arc<dyn AlertChannel> = alerts.clone();

    let mut factory = match seed.or(config.general.seed) {
        Some(seed) => SensorFactory::seeded(seed),
        None => SensorFactory::new(),
    };

    let monitor = build_monitor(&config.sensors, &mut factory, &sink, &channel)
        .context("Invalid sensor configuration")?;
    if monitor.is_empty() {
        tracing::warn!("No sensors configured, reports will be empty");
    }
    Ok(Assembled {
        monitor,
        alerts,
        log_path,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };
    if cli.no_log {
        config.log.enabled = false;
    }

    let command = cli.command.unwrap_or(Commands::Run {
        cycles: None,
        interval_ms: None,
        prompt_every: None,
        seed: None,
        json: false,
    });

    match command {
        Commands::Config => {
            run_show_config(&config)?;
        }
        Commands::Once { seed, json } => {
            let mut app = assemble(&config, seed)?;
            run_once(
                &mut app.monitor,
                &app.alerts,
                json,
                app.log_path.as_deref(),
                &mut std::io::stdout(),
            )?;
        }
        Commands::Run {
            cycles,
            interval_ms,
            prompt_every,
            seed,
            json,
        } => {
            let mut app = assemble(&config, seed)?;
            let options = RunOptions {
                interval: Duration::from_millis(interval_ms.unwrap_or(config.general.interval_ms)),
                prompt_every: prompt_every.unwrap_or(config.general.prompt_every),
                max_cycles: cycles.or(config.general.max_cycles),
                json,
                log_path: app.log_path.clone(),
            };
            if !json {
                print_banner();
            }
            let mut prompt = StdinPrompt::new();
            let summary = run_monitoring(
                &mut app.monitor,
                &app.alerts,
                &options,
                &mut prompt,
                &mut std::io::stdout(),
            )
            .await?;
            tracing::info!("Monitoring finished after {} cycle(s)", summary.cycles);
        }
    }

    Ok(())
}
