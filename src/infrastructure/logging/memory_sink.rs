use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::ports::log_sink::{format_log_line, LogSink, SinkError};
use crate::domain::value_objects::sensor_kind::SensorKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub kind: SensorKind,
    pub value: f64,
}

impl std::fmt::Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_log_line(self.kind, self.value))
    }
}

/// Keeps every record in memory. Unbounded, so meant for tests.
pub struct InMemoryLogSink {
    records: Mutex<Vec<LogRecord>>,
}

impl InMemoryLogSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Records in append order. Empty if the lock was poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for InMemoryLogSink {
    fn append(&self, kind: SensorKind, value: f64) -> Result<(), SinkError> {
        self.records
            .lock()
            .map_err(|_| SinkError::WriteFailed("lock poisoned".into()))?
            .push(LogRecord { kind, value });
        Ok(())
    }
}
