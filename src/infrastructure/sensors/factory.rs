use crate::domain::ports::sensor::{Sensor, SensorError};
use crate::domain::value_objects::sensor_kind::SensorKind;

use super::simulated::SimulatedSensor;

/// Builds simulated sensors by kind name.
///
/// A seeded factory hands each sensor it builds a distinct seed derived from
/// the base seed, so a whole sensor set is reproducible.
#[derive(Debug, Default)]
pub struct SensorFactory {
    seed: Option<u64>,
    built: u64,
}

impl SensorFactory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: None,
            built: 0,
        }
    }

    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            built: 0,
        }
    }

    /// Create a sensor from its exact, case-sensitive kind name.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::InvalidConfiguration` if `kind_name` is not
    /// one of `Temperature`, `Pressure` or `Vibration`.
    pub fn create_sensor(&mut self, kind_name: &str) -> Result<Box<dyn Sensor>, SensorError> {
        let kind: SensorKind = kind_name.parse()?;
        Ok(self.create(kind))
    }

    #[must_use]
    pub fn create(&mut self, kind: SensorKind) -> Box<dyn Sensor> {
        let sensor = match self.seed {
            Some(seed) => SimulatedSensor::seeded(kind, seed.wrapping_add(self.built)),
            None => SimulatedSensor::new(kind),
        };
        self.built += 1;
        tracing::debug!("Created {kind} sensor");
        Box::new(sensor)
    }
}
