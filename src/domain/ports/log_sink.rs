use thiserror::Error;

use crate::domain::value_objects::sensor_kind::SensorKind;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to append reading to log: {0}")]
    WriteFailed(String),
}

/// Append-only record of sensor readings.
pub trait LogSink: Send + Sync {
    /// Append one `{kind, value}` record.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::WriteFailed` if the backing store is unavailable.
    fn append(&self, kind: SensorKind, value: f64) -> Result<(), SinkError>;
}

/// Text of a single log record: `<Kind> Sensor: <value>`, value unrounded.
#[must_use]
pub fn format_log_line(kind: SensorKind, value: f64) -> String {
    format!("{kind} Sensor: {value}")
}
