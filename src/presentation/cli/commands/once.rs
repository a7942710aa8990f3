use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::application::services::monitor::HealthMonitor;
use crate::domain::entities::report::CycleReport;
use crate::infrastructure::notifications::recording::RecordingAlertChannel;
use crate::presentation::cli::formatters::report_fmt;

/// Run one cycle and attach the alerts its reads raised.
///
/// # Errors
///
/// Returns an error if a sensor read fails.
pub fn collect_cycle(
    monitor: &mut HealthMonitor,
    alerts: &RecordingAlertChannel,
) -> anyhow::Result<CycleReport> {
    let result = monitor.run_cycle().context("Monitoring cycle failed");
    // Alerts from a failed cycle are dropped with it
    let raised = alerts.drain();
    let mut report = result?;
    report.alerts = raised;
    Ok(report)
}

/// Print a report as text or as a JSON line.
///
/// # Errors
///
/// Returns an error if writing or serialization fails.
pub fn emit_report(
    out: &mut dyn Write,
    report: &CycleReport,
    json: bool,
    log_path: Option<&Path>,
) -> anyhow::Result<()> {
    if json {
        report_fmt::write_report_json(out, report)
    } else {
        report_fmt::write_report(out, report, log_path).context("Failed to print report")
    }
}

/// Run exactly one cycle and print it.
///
/// # Errors
///
/// Returns an error if a sensor read fails or the report cannot be written.
pub fn run_once(
    monitor: &mut HealthMonitor,
    alerts: &RecordingAlertChannel,
    json: bool,
    log_path: Option<&Path>,
    out: &mut dyn Write,
) -> anyhow::Result<CycleReport> {
    let report = collect_cycle(monitor, alerts)?;
    emit_report(out, &report, json, log_path)?;
    Ok(report)
}
