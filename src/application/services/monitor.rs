use chrono::Utc;

use crate::domain::entities::prediction::MaintenancePrediction;
use crate::domain::entities::report::{CycleReport, StatusLine};
use crate::domain::ports::sensor::{Sensor, SensorError};
use crate::domain::rules::RuleEngine;

/// Owns the registered sensors and evaluates them in insertion order.
///
/// Sensors may be plain or decorated; the monitor only sees the `Sensor`
/// capability and never writes to the log sink itself.
pub struct HealthMonitor {
    sensors: Vec<Box<dyn Sensor>>,
    rule_engine: RuleEngine,
    cycles_run: u64,
}

impl HealthMonitor {
    #[must_use]
    pub fn new(rule_engine: RuleEngine) -> Self {
        Self {
            sensors: Vec::new(),
            rule_engine,
            cycles_run: 0,
        }
    }

    /// Register a sensor. No deduplication: several sensors of one kind are fine.
    pub fn add_sensor(&mut self, sensor: Box<dyn Sensor>) {
        tracing::debug!("Sensor added: {}", sensor.kind());
        self.sensors.push(sensor);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    #[must_use]
    pub const fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    /// Read every sensor once and report `{kind, value}` per sensor.
    ///
    /// # Errors
    ///
    /// Returns the first sensor error; the remaining sensors are not read.
    pub fn monitor(&mut self) -> Result<Vec<StatusLine>, SensorError> {
        self.sensors
            .iter_mut()
            .map(|sensor| -> Result<StatusLine, SensorError> {
                let value = sensor.read_data()?;
                Ok(StatusLine {
                    kind: sensor.kind(),
                    value,
                })
            })
            .collect()
    }

    /// Take a fresh reading from every sensor and classify it.
    ///
    /// These readings are independent of any taken by [`Self::monitor`].
    ///
    /// # Errors
    ///
    /// Returns the first sensor error; the remaining sensors are not read.
    pub fn predict_maintenance(&mut self) -> Result<Vec<MaintenancePrediction>, SensorError> {
        let lines = self.monitor()?;
        Ok(lines.iter().map(|line| self.classify(line)).collect())
    }

    /// One cycle: a single reading per sensor feeds both the status lines
    /// and the predictions.
    ///
    /// # Errors
    ///
    /// Returns the first sensor error, aborting the cycle.
    pub fn run_cycle(&mut self) -> Result<CycleReport, SensorError> {
        let readings = self.monitor().map_err(|e| {
            tracing::error!("Cycle {} aborted: {e}", self.cycles_run + 1);
            e
        })?;
        let predictions = readings.iter().map(|line| self.classify(line)).collect();

        self.cycles_run += 1;
        let report = CycleReport {
            cycle: self.cycles_run,
            timestamp: Utc::now(),
            readings,
            predictions,
            alerts: Vec::new(),
        };

        if report.alerts_due() > 0 {
            tracing::info!(
                "Cycle {}: {} sensor(s) need maintenance",
                report.cycle,
                report.alerts_due()
            );
        } else {
            tracing::debug!("Cycle {}: all sensors within normal range", report.cycle);
        }

        Ok(report)
    }

    fn classify(&self, line: &StatusLine) -> MaintenancePrediction {
        MaintenancePrediction {
            kind: line.kind,
            value: line.value,
            prediction: self.rule_engine.predict(line.kind, line.value),
        }
    }
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new(RuleEngine::default())
    }
}
