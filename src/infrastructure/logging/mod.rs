pub mod file_sink;
pub mod memory_sink;
pub mod null_sink;

pub use file_sink::FileLogSink;
pub use memory_sink::{InMemoryLogSink, LogRecord};
pub use null_sink::NullLogSink;
