#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/builder_test.rs"]
mod builder_test;

use super::*;
use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Provides configurable way to build a map using fluent interface style.
pub struct MapBuilder {
    width: usize,
    height: usize,
    depth: usize,
    random: Option<Arc<dyn Random>>,
    config: TrainerConfig,
    initializer: Option<Arc<dyn Initializer>>,
    trainer: Option<Arc<dyn Trainer>>,
}

impl MapBuilder {
    /// Creates a new instance of `MapBuilder` for a map of given shape.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            random: None,
            config: TrainerConfig::default(),
            initializer: None,
            trainer: None,
        }
    }

    /// Sets a random source used by default initializer.
    pub fn with_random(mut self, random: Arc<dyn Random>) -> Self {
        self.random = Some(random);
        self
    }

    /// Sets an initial learning rate used by default trainer.
    /// Default is 0.02.
    pub fn with_learning_rate(mut self, learning_rate: Float) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Sets amount of training iterations used by default trainer.
    /// Default is 100.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets telemetry mode used by default trainer.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.config.telemetry_mode = telemetry_mode;
        self
    }

    /// Sets a custom initializer. Random source is ignored then.
    pub fn with_initializer(mut self, initializer: Arc<dyn Initializer>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Sets a custom trainer. Learning rate, iterations and telemetry settings are ignored then.
    pub fn with_trainer(mut self, trainer: Arc<dyn Trainer>) -> Self {
        self.trainer = Some(trainer);
        self
    }

    /// Builds a map.
    pub fn build(self) -> ArgumentResult<Map> {
        self.config.validate()?;

        let initializer = self.initializer.unwrap_or_else(|| {
            let random = self.random.unwrap_or_else(|| Arc::new(DefaultRandom::default()));
            Arc::new(MapInitializer::new(random))
        });

        let trainer = self.trainer.unwrap_or_else(|| Arc::new(MapTrainer::new(self.config)));

        Ok(Map::with_strategies(self.width, self.height, self.depth, initializer, trainer))
    }
}
