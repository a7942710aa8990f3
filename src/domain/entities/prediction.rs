use serde::{Deserialize, Serialize};

use crate::domain::value_objects::sensor_kind::SensorKind;

/// Maintenance recommendation derived from a single reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Overheating,
    HydraulicFailureRisk,
    ExcessiveVibration,
    Normal,
}

impl Prediction {
    #[must_use]
    pub const fn requires_maintenance(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    /// Operator-facing recommendation for a reading of `kind`.
    #[must_use]
    pub fn message(&self, kind: SensorKind) -> String {
        match self {
            Self::Overheating => {
                "High temperature indicates overheating. Schedule cooling system check.".into()
            }
            Self::HydraulicFailureRisk => {
                "High pressure may cause hydraulic failure. Inspect hydraulic lines.".into()
            }
            Self::ExcessiveVibration => {
                "Excessive vibration detected. Check bearings or engine mounts.".into()
            }
            Self::Normal => format!("{kind} sensor readings are within normal range."),
        }
    }
}

/// One classified reading in a maintenance report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePrediction {
    pub kind: SensorKind,
    pub value: f64,
    pub prediction: Prediction,
}

impl MaintenancePrediction {
    #[must_use]
    pub fn message(&self) -> String {
        self.prediction.message(self.kind)
    }
}

impl std::fmt::Display for MaintenancePrediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prediction: {}", self.message())
    }
}
