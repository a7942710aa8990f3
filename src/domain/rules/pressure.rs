use crate::domain::entities::prediction::Prediction;
use crate::domain::value_objects::sensor_kind::SensorKind;

use super::MaintenanceRule;

pub struct HydraulicPressureRule;

impl MaintenanceRule for HydraulicPressureRule {
    fn name(&self) -> &'static str {
        "hydraulic_pressure"
    }

    fn evaluate(&self, kind: SensorKind, value: f64) -> Option<Prediction> {
        (kind == SensorKind::Pressure && value > kind.maintenance_threshold())
            .then_some(Prediction::HydraulicFailureRisk)
    }
}
