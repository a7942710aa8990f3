use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::sensor_kind::SensorKind;

/// Raised when a decorated sensor's reading strictly exceeds its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdAlert {
    pub timestamp: DateTime<Utc>,
    pub kind: SensorKind,
    pub value: f64,
    pub threshold: f64,
}

impl ThresholdAlert {
    #[must_use]
    pub fn new(kind: SensorKind, value: f64, threshold: f64) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            value,
            threshold,
        }
    }
}

impl std::fmt::Display for ThresholdAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[ALERT] {} Sensor exceeds threshold! Reading: {}, Threshold: {}",
            self.kind, self.value, self.threshold
        )
    }
}
