//! A module which provides simple logging of training progress.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often training schedule is logged, in iterations.
        log_every: usize,
    },
}

/// Writes information about training run into log.
pub struct Telemetry {
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), mode }
    }

    /// Reports training start.
    pub fn on_start(&self, shape: (usize, usize, usize), samples: usize, iterations: usize) {
        let (width, height, depth) = shape;
        self.log(
            format!(
                "[{}s] started training {width}x{height} map of depth {depth} on {samples} samples, {iterations} iterations",
                self.time.elapsed_secs()
            )
            .as_str(),
        );
    }

    /// Reports training skipped due to degenerate lattice: no nodes or lattice radius below one.
    pub fn on_skip(&self, size: (usize, usize), lattice_radius: Float) {
        let (width, height) = size;
        self.log(
            format!(
                "[{}s] {width}x{height} map with lattice radius {lattice_radius} is degenerate, training skipped",
                self.time.elapsed_secs()
            )
            .as_str(),
        );
    }

    /// Reports schedule of the given iteration.
    pub fn on_iteration(&self, iteration: usize, learning_rate: Float, neighborhood_radius: Float) {
        if let TelemetryMode::OnlyLogging { log_every, .. } = &self.mode {
            if *log_every > 0 && iteration % *log_every == 0 {
                self.log(
                    format!(
                        "[{}s] iteration {iteration}: learning rate {learning_rate:.5}, neighborhood radius {neighborhood_radius:.3}",
                        self.time.elapsed_secs()
                    )
                    .as_str(),
                );
            }
        }
    }

    /// Reports training completion.
    pub fn on_finish(&self, iterations: usize) {
        self.log(format!("[{}s] training completed, iterations: {iterations}", self.time.elapsed_secs()).as_str());
        self.log(format!("elapsed: {}ms", self.time.elapsed_millis()).as_str());
    }

    /// Writes log message if logging is enabled.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message);
        }
    }
}
