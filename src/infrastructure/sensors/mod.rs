pub mod alerting;
pub mod factory;
pub mod simulated;

pub use alerting::AlertingSensor;
pub use factory::SensorFactory;
pub use simulated::SimulatedSensor;
