pub mod monitor;
pub mod setup;

pub use monitor::HealthMonitor;
pub use setup::build_monitor;
