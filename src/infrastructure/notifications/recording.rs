use std::sync::Mutex;

use crate::domain::entities::alert::ThresholdAlert;
use crate::domain::ports::alert_channel::{AlertChannel, AlertError};

/// Keeps emitted alerts in memory, in emission order, until drained.
///
/// The CLI drains it after every cycle so alerts are reported with the
/// cycle that raised them.
pub struct RecordingAlertChannel {
    alerts: Mutex<Vec<ThresholdAlert>>,
}

impl RecordingAlertChannel {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<ThresholdAlert> {
        self.alerts
            .lock()
            .map(|alerts| alerts.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything emitted since the last drain.
    #[must_use]
    pub fn drain(&self) -> Vec<ThresholdAlert> {
        self.alerts
            .lock()
            .map(|mut alerts| std::mem::take(&mut *alerts))
            .unwrap_or_default()
    }
}

impl Default for RecordingAlertChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertChannel for RecordingAlertChannel {
    fn emit(&self, alert: &ThresholdAlert) -> Result<(), AlertError> {
        self.alerts
            .lock()
            .map_err(|_| AlertError::ChannelUnavailable("lock poisoned".into()))?
            .push(alert.clone());
        Ok(())
    }
}
