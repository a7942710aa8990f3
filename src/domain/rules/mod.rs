pub mod pressure;
pub mod temperature;
pub mod vibration;

use crate::domain::entities::prediction::Prediction;
use crate::domain::value_objects::sensor_kind::SensorKind;

/// A deterministic rule that classifies one reading.
/// Rules are pure functions: kind + value in, optional prediction out. No I/O.
pub trait MaintenanceRule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Returns a prediction if this rule fires for the reading
    fn evaluate(&self, kind: SensorKind, value: f64) -> Option<Prediction>;
}

/// Returns the default rules in evaluation order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn MaintenanceRule>> {
    vec![
        Box::new(temperature::OverheatingRule),
        Box::new(pressure::HydraulicPressureRule),
        Box::new(vibration::ExcessiveVibrationRule),
    ]
}

/// Runs rules in order; the first one that fires decides the prediction.
pub struct RuleEngine {
    rules: Vec<Box<dyn MaintenanceRule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn MaintenanceRule>>) -> Self {
        Self { rules }
    }

    /// Exactly one prediction per reading: `Normal` when no rule fires.
    #[must_use]
    pub fn predict(&self, kind: SensorKind, value: f64) -> Prediction {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(kind, value))
            .unwrap_or(Prediction::Normal)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
