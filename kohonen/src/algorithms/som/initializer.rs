#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/initializer_test.rs"]
mod initializer_test;

use super::*;
use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Bootstraps a map with weights drawn uniformly from the value range of the training data.
///
/// A single global range is used: `min` and `max` are taken across every component of every
/// training vector, not per dimension.
pub struct MapInitializer {
    random: Arc<dyn Random>,
}

impl MapInitializer {
    /// Creates a new instance of `MapInitializer` using given random source.
    pub fn new(random: Arc<dyn Random>) -> Self {
        Self { random }
    }
}

impl Default for MapInitializer {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()))
    }
}

impl Initializer for MapInitializer {
    fn initialize(&self, map: &mut Map, training_data: &[Vector]) -> ArgumentResult<()> {
        if training_data.is_empty() {
            return Err(ArgumentError::new(
                "training_data",
                "unable to initialize a self-organizing map without training data",
            ));
        }

        let (min, max) = training_data
            .iter()
            .flat_map(|vector| vector.iter())
            .fold((Float::MAX, Float::MIN), |(min, max), &value| (min.min(value), max.max(value)));

        // NOTE zero depth vectors carry no values, so the range stays inverted; weights are empty anyway
        let spread = if max >= min { max - min } else { 0. };
        let depth = map.depth();

        for y in 0..map.height() {
            for x in 0..map.width() {
                let weights =
                    (0..depth).map(|_| min + self.random.uniform_real(0., 1.) * spread).collect::<Vec<_>>();

                map.set(x, y, MapNode::new(x, y, weights.as_slice()));
            }
        }

        Ok(())
    }
}
