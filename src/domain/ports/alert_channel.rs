use thiserror::Error;

use crate::domain::entities::alert::ThresholdAlert;

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("alert channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Operator-facing output for threshold alerts.
pub trait AlertChannel: Send + Sync {
    /// Emit a single alert.
    ///
    /// # Errors
    ///
    /// Returns `AlertError` if the channel cannot be written to.
    fn emit(&self, alert: &ThresholdAlert) -> Result<(), AlertError>;
}
