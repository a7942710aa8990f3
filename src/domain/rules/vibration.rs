use crate::domain::entities::prediction::Prediction;
use crate::domain::value_objects::sensor_kind::SensorKind;

use super::MaintenanceRule;

pub struct ExcessiveVibrationRule;

impl MaintenanceRule for ExcessiveVibrationRule {
    fn name(&self) -> &'static str {
        "excessive_vibration"
    }

    fn evaluate(&self, kind: SensorKind, value: f64) -> Option<Prediction> {
        (kind == SensorKind::Vibration && value > kind.maintenance_threshold())
            .then_some(Prediction::ExcessiveVibration)
    }
}
