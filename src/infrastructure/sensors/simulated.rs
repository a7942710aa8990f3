use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::sensor::{Sensor, SensorError};
use crate::domain::value_objects::sensor_kind::SensorKind;

/// Sensor that draws readings uniformly from its kind's envelope.
pub struct SimulatedSensor<R = StdRng> {
    kind: SensorKind,
    rng: R,
    distribution: Uniform<f64>,
}

impl SimulatedSensor<StdRng> {
    #[must_use]
    pub fn new(kind: SensorKind) -> Self {
        Self::with_rng(kind, StdRng::from_entropy())
    }

    /// Reproducible sensor: the same seed yields the same reading sequence.
    #[must_use]
    pub fn seeded(kind: SensorKind, seed: u64) -> Self {
        Self::with_rng(kind, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedSensor<R> {
    #[must_use]
    pub fn with_rng(kind: SensorKind, rng: R) -> Self {
        let range = kind.range();
        Self {
            kind,
            rng,
            distribution: Uniform::new_inclusive(range.min, range.max),
        }
    }
}

impl<R: Rng + Send> Sensor for SimulatedSensor<R> {
    fn read_data(&mut self) -> Result<f64, SensorError> {
        Ok(self.distribution.sample(&mut self.rng))
    }

    fn kind(&self) -> SensorKind {
        self.kind
    }
}
