use std::sync::Arc;

use crate::domain::entities::alert::ThresholdAlert;
use crate::domain::ports::alert_channel::AlertChannel;
use crate::domain::ports::log_sink::LogSink;
use crate::domain::ports::sensor::{Sensor, SensorError};
use crate::domain::value_objects::sensor_kind::SensorKind;

/// Wraps a sensor: every reading is appended to the log sink, and readings
/// strictly above `threshold` raise an alert. The reading itself is returned
/// unchanged.
pub struct AlertingSensor {
    inner: Box<dyn Sensor>,
    threshold: f64,
    sink: Arc<dyn LogSink>,
    alerts: Arc<dyn AlertChannel>,
}

impl AlertingSensor {
    #[must_use]
    pub fn new(
        inner: Box<dyn Sensor>,
        threshold: f64,
        sink: Arc<dyn LogSink>,
        alerts: Arc<dyn AlertChannel>,
    ) -> Self {
        Self {
            inner,
            threshold,
            sink,
            alerts,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Sensor for AlertingSensor {
    fn read_data(&mut self) -> Result<f64, SensorError> {
        let value = self.inner.read_data()?;
        let kind = self.inner.kind();

        // A lost log line must not cost us the alert
        if let Err(e) = self.sink.append(kind, value) {
            tracing::warn!("Log sink write failed for {kind} sensor: {e}");
        }

        if value > self.threshold {
            let alert = ThresholdAlert::new(kind, value, self.threshold);
            tracing::debug!("{kind} reading {value} above threshold {}", self.threshold);
            if let Err(e) = self.alerts.emit(&alert) {
                tracing::warn!("Alert emission failed: {e}");
            }
        }

        Ok(value)
    }

    fn kind(&self) -> SensorKind {
        self.inner.kind()
    }
}
