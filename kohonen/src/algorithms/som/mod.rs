//! Provides an implementation of Self-Organizing Map on a flat rectangular lattice.
//!
//! The map is trained in two phases: an initializer fills every node with weights, then a trainer
//! runs competitive learning over the training data. Both phases are pluggable via the
//! [`Initializer`] and [`Trainer`] traits.

use crate::utils::{ArgumentError, ArgumentResult, Float};

mod builder;
pub use self::builder::*;

mod initializer;
pub use self::initializer::*;

mod map;
pub use self::map::*;

mod node;
pub use self::node::*;

mod state;
pub use self::state::*;

mod telemetry;
pub use self::telemetry::*;

mod trainer;
pub use self::trainer::*;

/// An ordered sequence of real numbers. Its length is called depth.
pub type Vector = Vec<Float>;

/// Populates map nodes before training.
pub trait Initializer {
    /// Fills every cell of the map with a fresh node, replacing existing ones.
    fn initialize(&self, map: &mut Map, training_data: &[Vector]) -> ArgumentResult<()>;
}

/// Trains a populated map.
pub trait Trainer {
    /// Adjusts map node weights towards the training data.
    fn train(&self, map: &mut Map, training_data: &[Vector]) -> ArgumentResult<()>;
}

/// Checks that every vector has the expected depth.
pub(crate) fn check_depth(training_data: &[Vector], depth: usize, parameter: &str) -> ArgumentResult<()> {
    match training_data.iter().position(|vector| vector.len() != depth) {
        Some(idx) => Err(ArgumentError::new(
            parameter,
            format!(
                "the training data contains a vector with an incorrect amount of data at {idx}: expected {depth}, got {}",
                training_data[idx].len()
            ),
        )),
        None => Ok(()),
    }
}
