use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::domain::entities::alert::ThresholdAlert;
use crate::domain::entities::prediction::MaintenancePrediction;
use crate::domain::entities::report::{CycleReport, StatusLine};

const SEPARATOR_WIDTH: usize = 67;

#[must_use]
pub fn format_status_line(line: &StatusLine) -> String {
    format!("{line} {}", line.kind.unit())
}

#[must_use]
pub fn format_alert(alert: &ThresholdAlert) -> String {
    let line = alert.to_string();
    match line.strip_prefix("[ALERT]") {
        Some(rest) => format!("{}{}", "[ALERT]".on_red().white().bold(), rest.red()),
        None => line.red().to_string(),
    }
}

#[must_use]
pub fn format_prediction(prediction: &MaintenancePrediction) -> String {
    let text = prediction.to_string();
    if prediction.prediction.requires_maintenance() {
        text.yellow().bold().to_string()
    } else {
        text.green().to_string()
    }
}

fn write_section_header(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bold().cyan())
}

/// Status lines, then the alerts raised while reading them.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_status(
    out: &mut dyn Write,
    lines: &[StatusLine],
    alerts: &[ThresholdAlert],
) -> io::Result<()> {
    write_section_header(out, "Monitoring Machine Health:")?;
    for line in lines {
        writeln!(out, "{}", format_status_line(line))?;
    }
    for alert in alerts {
        writeln!(out, "{}", format_alert(alert))?;
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_predictions(
    out: &mut dyn Write,
    predictions: &[MaintenancePrediction],
) -> io::Result<()> {
    writeln!(out)?;
    write_section_header(out, "Predictive Maintenance Analysis:")?;
    for prediction in predictions {
        writeln!(out, "{}", format_prediction(prediction))?;
    }
    Ok(())
}

/// Human-readable cycle report, followed by the log location when file
/// logging is on.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report(
    out: &mut dyn Write,
    report: &CycleReport,
    log_path: Option<&Path>,
) -> io::Result<()> {
    write_status(out, &report.readings, &report.alerts)?;
    write_predictions(out, &report.predictions)?;
    if let Some(path) = log_path {
        writeln!(out, "Logs saved to {}", path.display())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "*".repeat(SEPARATOR_WIDTH).dimmed())?;
    out.flush()
}

/// One JSON object per line, alerts included, so a run can be piped into
/// other tools.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_report_json(out: &mut dyn Write, report: &CycleReport) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
