use std::path::PathBuf;
use std::sync::Arc;

use crate::application::config::{LogConfig, SensorConfig};
use crate::application::services::monitor::HealthMonitor;
use crate::domain::ports::alert_channel::AlertChannel;
use crate::domain::ports::log_sink::LogSink;
use crate::domain::ports::sensor::SensorError;
use crate::domain::rules::RuleEngine;
use crate::infrastructure::logging::file_sink::FileLogSink;
use crate::infrastructure::logging::null_sink::NullLogSink;
use crate::infrastructure::sensors::alerting::AlertingSensor;
use crate::infrastructure::sensors::factory::SensorFactory;

/// The sink decorated sensors write to, plus the file path when logging
/// to a file. Disabled logging discards records instead of keeping them.
#[must_use]
pub fn log_sink_for(config: &LogConfig) -> (Arc<dyn LogSink>, Option<PathBuf>) {
    if config.enabled {
        let sink = FileLogSink::new(&config.path);
        let path = sink.path().to_path_buf();
        (Arc::new(sink), Some(path))
    } else {
        tracing::debug!("Reading log disabled");
        (Arc::new(NullLogSink), None)
    }
}

/// Build a populated monitor from the configured sensor list.
///
/// Alerting sensors use their kind's maintenance threshold, so alerts and
/// predictions agree on what "too high" means.
///
/// # Errors
///
/// Returns `SensorError::InvalidConfiguration` on the first unknown kind
/// name; no monitor is returned in that case.
pub fn build_monitor(
    sensors: &[SensorConfig],
    factory: &mut SensorFactory,
    sink: &Arc<dyn LogSink>,
    alerts: &Arc<dyn AlertChannel>,
) -> Result<HealthMonitor, SensorError> {
    let mut monitor = HealthMonitor::new(RuleEngine::default());

    for entry in sensors {
        let sensor = factory.create_sensor(&entry.kind)?;
        if entry.alerting {
            let threshold = sensor.kind().maintenance_threshold();
            monitor.add_sensor(Box::new(AlertingSensor::new(
                sensor,
                threshold,
                Arc::clone(sink),
                Arc::clone(alerts),
            )));
        } else {
            monitor.add_sensor(sensor);
        }
    }

    tracing::info!("{} sensor(s) registered", monitor.len());
    Ok(monitor)
}
