use crate::domain::ports::log_sink::{LogSink, SinkError};
use crate::domain::value_objects::sensor_kind::SensorKind;

/// Discards every record. Used when file logging is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogSink;

impl NullLogSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LogSink for NullLogSink {
    fn append(&self, _kind: SensorKind, _value: f64) -> Result<(), SinkError> {
        Ok(())
    }
}
