use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` of plausible readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingRange {
    pub min: f64,
    pub max: f64,
}

impl ReadingRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}
