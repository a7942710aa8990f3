use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::ports::log_sink::{format_log_line, LogSink, SinkError};
use crate::domain::value_objects::sensor_kind::SensorKind;

pub const DEFAULT_LOG_PATH: &str = "machine_logs.txt";

/// Appends `<Kind> Sensor: <value>` lines to a text file.
///
/// The file is opened for every record and closed again when the handle
/// drops; the writer lock keeps lines from concurrent decorators whole.
pub struct FileLogSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLogSink {
    #[must_use]
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self::at(PathBuf::from(expanded.as_ref()))
    }

    #[must_use]
    pub const fn at(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileLogSink {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl LogSink for FileLogSink {
    fn append(&self, kind: SensorKind, value: f64) -> Result<(), SinkError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| SinkError::WriteFailed("writer lock poisoned".into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SinkError::WriteFailed(format!("cannot create log directory: {e}"))
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::WriteFailed(format!("cannot open log file: {e}")))?;

        writeln!(file, "{}", format_log_line(kind, value))
            .map_err(|e| SinkError::WriteFailed(format!("cannot write log file: {e}")))
    }
}
