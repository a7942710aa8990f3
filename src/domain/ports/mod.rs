pub mod alert_channel;
pub mod log_sink;
pub mod sensor;

pub use alert_channel::{AlertChannel, AlertError};
pub use log_sink::{format_log_line, LogSink, SinkError};
pub use sensor::{Sensor, SensorError};
