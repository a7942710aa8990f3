#![allow(clippy::expect_used)]

use std::sync::Arc;

use machine_health::domain::ports::sensor::{Sensor, SensorError};
use machine_health::domain::value_objects::sensor_kind::SensorKind;
use machine_health::infrastructure::logging::memory_sink::InMemoryLogSink;
use machine_health::infrastructure::notifications::recording::RecordingAlertChannel;
use machine_health::infrastructure::sensors::alerting::AlertingSensor;
use machine_health::infrastructure::sensors::factory::SensorFactory;

const SAMPLES: usize = 1_000;

#[test]
fn factory_builds_every_known_kind() {
    let mut factory = SensorFactory::new();
    for name in ["Temperature", "Pressure", "Vibration"] {
        let sensor = factory.create_sensor(name).expect("known kind");
        assert_eq!(sensor.kind().to_string(), name);
    }
}

#[test]
fn factory_rejects_unknown_names() {
    let mut factory = SensorFactory::new();
    for name in ["Humidity", "TEMPERATURE", "pressure", "Vibration\n"] {
        match factory.create_sensor(name) {
            Err(SensorError::InvalidConfiguration(n)) => assert_eq!(n, name),
            Err(other) => panic!("unexpected error for {name:?}: {other}"),
            Ok(_) => panic!("{name:?} should be rejected"),
        }
    }
}

#[test]
fn factory_readings_stay_in_envelope() {
    let mut factory = SensorFactory::seeded(2024);
    for kind in SensorKind::ALL {
        let mut sensor = factory.create(kind);
        let range = kind.range();
        for _ in 0..SAMPLES {
            let value = sensor.read_data().expect("read");
            assert!(range.contains(value), "{kind} produced {value}");
        }
    }
}

#[test]
fn factory_readings_spread_over_envelope() {
    let mut factory = SensorFactory::seeded(77);
    for kind in SensorKind::ALL {
        let mut sensor = factory.create(kind);
        let range = kind.range();
        let values: Vec<f64> = (0..SAMPLES)
            .map(|_| sensor.read_data().expect("read"))
            .collect();

        #[allow(clippy::cast_precision_loss)]
        let mean = values.iter().sum::<f64>() / SAMPLES as f64;
        let midpoint = (range.min + range.max) / 2.0;
        assert!(
            (mean - midpoint).abs() < range.width() * 0.05,
            "{kind} mean {mean} far from midpoint {midpoint}"
        );

        let lower_half = values.iter().filter(|v| **v < midpoint).count();
        assert!(
            (400..=600).contains(&lower_half),
            "{kind}: {lower_half} of {SAMPLES} below midpoint"
        );
    }
}

#[test]
fn decoration_is_transparent() {
    let mut factory = SensorFactory::seeded(3);
    for kind in SensorKind::ALL {
        let mut sensor = AlertingSensor::new(
            factory.create(kind),
            kind.maintenance_threshold(),
            Arc::new(InMemoryLogSink::new()),
            Arc::new(RecordingAlertChannel::new()),
        );
        assert_eq!(sensor.kind(), kind);
        for _ in 0..100 {
            assert!(kind.range().contains(sensor.read_data().expect("read")));
        }
    }
}

#[test]
fn alerts_match_threshold_law_over_many_reads() {
    let kind = SensorKind::Temperature;
    let sink = Arc::new(InMemoryLogSink::new());
    let alerts = Arc::new(RecordingAlertChannel::new());
    let mut sensor = AlertingSensor::new(
        SensorFactory::seeded(10).create(kind),
        75.0,
        sink.clone(),
        alerts.clone(),
    );

    for _ in 0..SAMPLES {
        sensor.read_data().expect("read");
    }

    let records = sink.records();
    assert_eq!(records.len(), SAMPLES);
    let above = records.iter().filter(|r| r.value > 75.0).count();
    assert_eq!(alerts.alerts().len(), above);
    assert!(alerts.alerts().iter().all(|a| a.value > a.threshold));
}

#[test]
fn decorators_can_stack() {
    let outer_sink = Arc::new(InMemoryLogSink::new());
    let inner_sink = Arc::new(InMemoryLogSink::new());
    let inner = AlertingSensor::new(
        SensorFactory::seeded(4).create(SensorKind::Pressure),
        240.0,
        inner_sink.clone(),
        Arc::new(RecordingAlertChannel::new()),
    );
    let mut outer = AlertingSensor::new(
        Box::new(inner),
        250.0,
        outer_sink.clone(),
        Arc::new(RecordingAlertChannel::new()),
    );

    let value = outer.read_data().expect("read");
    assert_eq!(outer.kind(), SensorKind::Pressure);
    assert_eq!(inner_sink.records()[0].value, value);
    assert_eq!(outer_sink.records()[0].value, value);
}
