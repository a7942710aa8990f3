pub mod reading_range;
pub mod sensor_kind;

pub use reading_range::ReadingRange;
pub use sensor_kind::SensorKind;
