pub mod alert;
pub mod prediction;
pub mod report;

pub use alert::ThresholdAlert;
pub use prediction::{MaintenancePrediction, Prediction};
pub use report::{CycleReport, StatusLine};
