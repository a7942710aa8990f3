#![allow(clippy::expect_used)]

use std::sync::Arc;

use machine_health::application::services::monitor::HealthMonitor;
use machine_health::domain::entities::prediction::Prediction;
use machine_health::domain::ports::alert_channel::AlertChannel;
use machine_health::domain::ports::log_sink::LogSink;
use machine_health::domain::ports::sensor::{Sensor, SensorError};
use machine_health::domain::value_objects::sensor_kind::SensorKind;
use machine_health::infrastructure::logging::file_sink::FileLogSink;
use machine_health::infrastructure::logging::memory_sink::InMemoryLogSink;
use machine_health::infrastructure::notifications::recording::RecordingAlertChannel;
use machine_health::infrastructure::sensors::alerting::AlertingSensor;

/// Always returns the same reading.
struct FixedSensor {
    kind: SensorKind,
    value: f64,
}

impl Sensor for FixedSensor {
    fn read_data(&mut self) -> Result<f64, SensorError> {
        Ok(self.value)
    }

    fn kind(&self) -> SensorKind {
        self.kind
    }
}

fn fixed(kind: SensorKind, value: f64) -> Box<dyn Sensor> {
    Box::new(FixedSensor { kind, value })
}

fn decorated(
    kind: SensorKind,
    value: f64,
    threshold: f64,
    sink: &Arc<dyn LogSink>,
    alerts: &Arc<dyn AlertChannel>,
) -> Box<dyn Sensor> {
    Box::new(AlertingSensor::new(
        fixed(kind, value),
        threshold,
        Arc::clone(sink),
        Arc::clone(alerts),
    ))
}

#[test]
fn overheating_machine_end_to_end() {
    let sink = Arc::new(InMemoryLogSink::new());
    let alerts = Arc::new(RecordingAlertChannel::new());
    let sink_dyn: Arc<dyn LogSink> = sink.clone();
    let alerts_dyn: Arc<dyn AlertChannel> = alerts.clone();

    let mut monitor = HealthMonitor::default();
    monitor.add_sensor(decorated(SensorKind::Temperature, 79.0, 75.0, &sink_dyn, &alerts_dyn));
    monitor.add_sensor(decorated(SensorKind::Pressure, 230.0, 240.0, &sink_dyn, &alerts_dyn));

    let report = monitor.run_cycle().expect("cycle");

    // One alert, for temperature only
    let raised = alerts.alerts();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].kind, SensorKind::Temperature);
    assert_eq!(
        raised[0].to_string(),
        "[ALERT] Temperature Sensor exceeds threshold! Reading: 79, Threshold: 75"
    );

    // Both readings logged, in order
    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].to_string(), "Temperature Sensor: 79");
    assert_eq!(records[1].to_string(), "Pressure Sensor: 230");

    // Temperature flagged, pressure normal
    assert_eq!(report.predictions.len(), 2);
    assert_eq!(report.predictions[0].kind, SensorKind::Temperature);
    assert_eq!(report.predictions[0].prediction, Prediction::Overheating);
    assert_eq!(report.predictions[1].kind, SensorKind::Pressure);
    assert_eq!(report.predictions[1].prediction, Prediction::Normal);
    assert_eq!(report.alerts_due(), 1);
}

#[test]
fn separate_monitor_and_predict_calls_read_twice() {
    let sink = Arc::new(InMemoryLogSink::new());
    let sink_dyn: Arc<dyn LogSink> = sink.clone();
    let alerts_dyn: Arc<dyn AlertChannel> = Arc::new(RecordingAlertChannel::new());

    let mut monitor = HealthMonitor::default();
    monitor.add_sensor(decorated(SensorKind::Vibration, 0.9, 1.2, &sink_dyn, &alerts_dyn));

    monitor.monitor().expect("monitor");
    monitor.predict_maintenance().expect("predict");

    assert_eq!(sink.records().len(), 2);
}

#[test]
fn undecorated_sensors_leave_the_log_alone() {
    let sink = Arc::new(InMemoryLogSink::new());
    let sink_dyn: Arc<dyn LogSink> = sink.clone();
    let alerts = Arc::new(RecordingAlertChannel::new());
    let alerts_dyn: Arc<dyn AlertChannel> = alerts.clone();

    let mut monitor = HealthMonitor::default();
    monitor.add_sensor(fixed(SensorKind::Temperature, 79.5));
    monitor.add_sensor(decorated(SensorKind::Vibration, 1.0, 1.2, &sink_dyn, &alerts_dyn));

    let report = monitor.run_cycle().expect("cycle");

    assert_eq!(sink.records().len(), 1);
    assert!(alerts.alerts().is_empty());
    // The plain sensor is still classified
    assert_eq!(report.predictions[0].prediction, Prediction::Overheating);
}

#[test]
fn file_log_receives_one_line_per_decorated_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("machine_logs.txt");
    let sink: Arc<dyn LogSink> = Arc::new(FileLogSink::at(path.clone()));
    let alerts: Arc<dyn AlertChannel> = Arc::new(RecordingAlertChannel::new());

    let mut monitor = HealthMonitor::default();
    monitor.add_sensor(decorated(SensorKind::Temperature, 79.0, 75.0, &sink, &alerts));
    monitor.add_sensor(decorated(SensorKind::Pressure, 230.0, 240.0, &sink, &alerts));

    for _ in 0..3 {
        monitor.run_cycle().expect("cycle");
    }

    let content = std::fs::read_to_string(&path).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Temperature Sensor: 79");
    assert_eq!(lines[1], "Pressure Sensor: 230");
    assert_eq!(lines[5], "Pressure Sensor: 230");
}
