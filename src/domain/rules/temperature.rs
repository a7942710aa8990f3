use crate::domain::entities::prediction::Prediction;
use crate::domain::value_objects::sensor_kind::SensorKind;

use super::MaintenanceRule;

pub struct OverheatingRule;

impl MaintenanceRule for OverheatingRule {
    fn name(&self) -> &'static str {
        "overheating"
    }

    fn evaluate(&self, kind: SensorKind, value: f64) -> Option<Prediction> {
        (kind == SensorKind::Temperature && value > kind.maintenance_threshold())
            .then_some(Prediction::Overheating)
    }
}
