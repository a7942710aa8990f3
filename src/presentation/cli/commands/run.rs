use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::services::monitor::HealthMonitor;
use crate::infrastructure::notifications::recording::RecordingAlertChannel;
use crate::presentation::cli::commands::once::{collect_cycle, emit_report};
use crate::presentation::cli::prompt::OperatorPrompt;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub interval: Duration,
    /// Ask the operator after every `prompt_every` cycles; 0 never asks.
    pub prompt_every: u64,
    pub max_cycles: Option<u64>,
    pub json: bool,
    /// Shown after each human-readable report when file logging is on.
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CycleLimit,
    OperatorDeclined,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u64,
    pub stop_reason: StopReason,
}

enum Event {
    Tick,
    Shutdown,
}

/// Drive the monitor at a fixed interval until told to stop.
///
/// Stops on Ctrl+C, when `max_cycles` is reached, or when the operator
/// declines to continue at a prompt. Alerts raised during a cycle are
/// drained from `alerts` and printed with that cycle's report.
///
/// # Errors
///
/// Returns the first failed cycle; monitoring does not continue past it.
pub async fn run_monitoring(
    monitor: &mut HealthMonitor,
    alerts: &RecordingAlertChannel,
    options: &RunOptions,
    prompt: &mut dyn OperatorPrompt,
    out: &mut dyn Write,
) -> anyhow::Result<RunSummary> {
    tracing::info!(
        "Monitoring {} sensor(s) every {}ms",
        monitor.len(),
        options.interval.as_millis()
    );
    // tokio panics on a zero period
    let period = options.interval.max(Duration::from_millis(1));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut cycles = 0u64;
    let stop_reason = loop {
        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            _ = &mut shutdown => Event::Shutdown,
        };
        if matches!(event, Event::Shutdown) {
            break StopReason::Interrupted;
        }

        let report = collect_cycle(monitor, alerts)?;
        cycles += 1;
        emit_report(out, &report, options.json, options.log_path.as_deref())?;

        if options.max_cycles.is_some_and(|max| cycles >= max) {
            break StopReason::CycleLimit;
        }

        if options.prompt_every > 0 && cycles % options.prompt_every == 0 {
            let answer = tokio::select! {
                answer = prompt.confirm_continue() => Some(answer?),
                _ = &mut shutdown => None,
            };
            match answer {
                Some(true) => tracing::debug!("Operator chose to continue"),
                Some(false) => break StopReason::OperatorDeclined,
                None => break StopReason::Interrupted,
            }
        }
    };

    match stop_reason {
        StopReason::Interrupted => {
            tracing::info!("Interrupt received, stopping after {cycles} cycle(s)");
            if !options.json {
                writeln!(out, "\nStopping monitor...")?;
            }
        }
        StopReason::CycleLimit => tracing::info!("Cycle limit reached ({cycles})"),
        StopReason::OperatorDeclined => {
            tracing::info!("Operator stopped monitoring after {cycles} cycle(s)");
        }
    }

    Ok(RunSummary {
        cycles,
        stop_reason,
    })
}
