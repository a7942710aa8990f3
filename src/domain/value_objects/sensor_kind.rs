use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::reading_range::ReadingRange;
use crate::domain::ports::sensor::SensorError;

/// Physical quantity measured by a sensor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Temperature,
    Pressure,
    Vibration,
}

impl SensorKind {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Pressure, Self::Vibration];

    /// Envelope of values a simulated sensor of this kind produces.
    #[must_use]
    pub const fn range(&self) -> ReadingRange {
        match self {
            Self::Temperature => ReadingRange::new(60.0, 80.0),
            Self::Pressure => ReadingRange::new(200.0, 250.0),
            Self::Vibration => ReadingRange::new(0.5, 1.5),
        }
    }

    /// Reading above which maintenance is predicted. Also the default alert
    /// threshold for decorated sensors built from configuration.
    #[must_use]
    pub const fn maintenance_threshold(&self) -> f64 {
        match self {
            Self::Temperature => 75.0,
            Self::Pressure => 240.0,
            Self::Vibration => 1.2,
        }
    }

    #[must_use]
    pub const fn unit(&self) -> &str {
        match self {
            Self::Temperature => "°C",
            Self::Pressure => "psi",
            Self::Vibration => "m/s²",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
            Self::Vibration => write!(f, "Vibration"),
        }
    }
}

impl FromStr for SensorKind {
    type Err = SensorError;

    /// Exact, case-sensitive match on the kind name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Temperature" => Ok(Self::Temperature),
            "Pressure" => Ok(Self::Pressure),
            "Vibration" => Ok(Self::Vibration),
            other => Err(SensorError::InvalidConfiguration(other.to_string())),
        }
    }
}
