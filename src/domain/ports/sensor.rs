use thiserror::Error;

use crate::domain::value_objects::sensor_kind::SensorKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    #[error("invalid sensor configuration: unknown sensor kind '{0}'")]
    InvalidConfiguration(String),
    #[error("failed to read {kind} sensor: {reason}")]
    ReadFailed { kind: SensorKind, reason: String },
}

/// A source of numeric readings of a single physical quantity.
///
/// Decorators implement this trait too, so callers never need to know
/// whether a sensor is wrapped.
pub trait Sensor: Send {
    /// Take one reading.
    ///
    /// # Errors
    ///
    /// Returns `SensorError::ReadFailed` if the underlying device cannot
    /// be read. Simulated sensors never fail.
    fn read_data(&mut self) -> Result<f64, SensorError>;

    /// Kind of quantity this sensor measures. Fixed for its lifetime.
    fn kind(&self) -> SensorKind;
}

impl<S: Sensor + ?Sized> Sensor for Box<S> {
    fn read_data(&mut self) -> Result<f64, SensorError> {
        (**self).read_data()
    }

    fn kind(&self) -> SensorKind {
        (**self).kind()
    }
}
