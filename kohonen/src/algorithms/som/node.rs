#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/node_test.rs"]
mod node_test;

use super::*;
use crate::algorithms::math::distance_squared;

/// Represents a node in the map: fixed lattice coordinates and a mutable weight vector.
#[derive(Clone, Debug, PartialEq)]
pub struct MapNode {
    x: usize,
    y: usize,
    weights: Vector,
}

impl MapNode {
    /// Creates a new instance of `MapNode`. Weights are copied.
    pub fn new(x: usize, y: usize, weights: &[Float]) -> Self {
        Self { x, y, weights: weights.to_vec() }
    }

    /// Returns x coordinate in the lattice.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Returns y coordinate in the lattice.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Returns a weight vector.
    pub fn weights(&self) -> &[Float] {
        self.weights.as_slice()
    }

    /// Returns squared distance to the other node in lattice space. Weights are not used.
    pub fn distance_squared_lattice(&self, other: &MapNode) -> Float {
        let dx = self.x as Float - other.x as Float;
        let dy = self.y as Float - other.y as Float;

        dx * dx + dy * dy
    }

    /// Returns squared distance to the given weights in weight space.
    pub fn distance_squared(&self, weights: &[Float]) -> ArgumentResult<Float> {
        distance_squared(self.weights.as_slice(), weights)
    }

    /// Moves each weight the `learning_rate * falloff` fraction of the way towards the input.
    pub fn adjust_weights(&mut self, input: &[Float], learning_rate: Float, falloff: Float) -> ArgumentResult<()> {
        if input.len() != self.weights.len() {
            return Err(ArgumentError::new(
                "input",
                format!(
                    "the weights cannot be adjusted when the input has an incorrect length: expected {}, got {}",
                    self.weights.len(),
                    input.len()
                ),
            ));
        }

        let ratio = learning_rate * falloff;
        self.weights.iter_mut().zip(input.iter()).for_each(|(weight, value)| {
            *weight += ratio * (value - *weight);
        });

        Ok(())
    }
}
