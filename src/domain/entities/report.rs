use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::ThresholdAlert;
use super::prediction::MaintenancePrediction;
use crate::domain::value_objects::sensor_kind::SensorKind;

/// A single `{kind, value}` line of a status report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusLine {
    pub kind: SensorKind,
    pub value: f64,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Sensor Reading: {:.2}", self.kind, self.value)
    }
}

/// Result of one read-and-evaluate pass over every registered sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub timestamp: DateTime<Utc>,
    pub readings: Vec<StatusLine>,
    pub predictions: Vec<MaintenancePrediction>,
    /// Threshold alerts raised while this cycle's sensors were read.
    #[serde(default)]
    pub alerts: Vec<ThresholdAlert>,
}

impl CycleReport {
    /// Number of sensors whose prediction calls for maintenance.
    #[must_use]
    pub fn alerts_due(&self) -> usize {
        self.predictions
            .iter()
            .filter(|p| p.prediction.requires_maintenance())
            .count()
    }
}
