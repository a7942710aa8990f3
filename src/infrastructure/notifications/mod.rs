pub mod recording;

pub use recording::RecordingAlertChannel;
