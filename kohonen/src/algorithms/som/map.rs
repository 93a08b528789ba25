#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/map_test.rs"]
mod map_test;

use super::*;
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};
use std::sync::Arc;

/// A Self-Organizing Map: a `width` x `height` lattice of nodes with weight vectors of `depth` size.
///
/// Nodes are kept in a contiguous row-major grid; neighbour relations are computed from
/// coordinates on demand. The grid is empty until the map is trained (or populated manually).
pub struct Map {
    width: usize,
    height: usize,
    depth: usize,
    nodes: Vec<Option<MapNode>>,
    initializer: Arc<dyn Initializer>,
    trainer: Arc<dyn Trainer>,
}

impl Map {
    /// Creates a new instance of `Map` with default initializer and trainer.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self::with_strategies(
            width,
            height,
            depth,
            Arc::new(MapInitializer::default()),
            Arc::new(MapTrainer::default()),
        )
    }

    /// Creates a new instance of `Map` with custom initialization and training strategies.
    pub fn with_strategies(
        width: usize,
        height: usize,
        depth: usize,
        initializer: Arc<dyn Initializer>,
        trainer: Arc<dyn Trainer>,
    ) -> Self {
        Self { width, height, depth, nodes: vec![None; width * height], initializer, trainer }
    }

    /// Returns the width of the lattice.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the lattice.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the length of every weight vector in the map.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a node at given position if the cell is populated.
    pub fn get(&self, x: usize, y: usize) -> Option<&MapNode> {
        self.index_of(x, y).and_then(|idx| self.nodes[idx].as_ref())
    }

    /// Returns a mutable node at given position if the cell is populated.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut MapNode> {
        self.index_of(x, y).and_then(|idx| self.nodes[idx].as_mut())
    }

    /// Puts the node at given position, returning the node which was there before.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of the lattice bounds.
    pub fn set(&mut self, x: usize, y: usize, node: MapNode) -> Option<MapNode> {
        let idx = self.index_of(x, y).unwrap_or_else(|| self.out_of_bounds(x, y));

        self.nodes[idx].replace(node)
    }

    /// Iterates over populated nodes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &MapNode> + '_ {
        self.nodes.iter().flatten()
    }

    /// Checks whether every cell of the lattice holds a node.
    pub fn is_populated(&self) -> bool {
        self.nodes.iter().all(Option::is_some)
    }

    /// Initializes the map from the training data and then trains it.
    /// Initialization always completes before the first training step.
    pub fn train(&mut self, training_data: &[Vector]) -> ArgumentResult<()> {
        check_depth(training_data, self.depth, "training_data")?;

        let initializer = self.initializer.clone();
        let trainer = self.trainer.clone();

        initializer.initialize(self, training_data)?;
        trainer.train(self, training_data)
    }

    /// Finds the node whose weights are the closest to the query. When several nodes are equally
    /// close, the first one in row-major order wins.
    pub fn get_best_matching_node(&self, query: &[Float]) -> ArgumentResult<&MapNode> {
        if query.len() != self.depth {
            return Err(ArgumentError::new(
                "query",
                format!(
                    "unable to determine the best matching node for data with different dimensions: expected {}, got {}",
                    self.depth,
                    query.len()
                ),
            ));
        }

        let mut best = self.populated_at(0)?;
        let mut best_distance = Float::MAX;

        for idx in 0..self.nodes.len() {
            let node = self.populated_at(idx)?;
            let distance = node.distance_squared(query)?;

            if compare_floats(distance, best_distance) == Ordering::Less {
                best = node;
                best_distance = distance;
            }
        }

        Ok(best)
    }

    fn populated_at(&self, idx: usize) -> ArgumentResult<&MapNode> {
        match self.nodes.get(idx) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(ArgumentError::new(
                "map",
                format!(
                    "unable to determine the best matching node: ({}, {}) is not populated",
                    idx % self.width,
                    idx / self.width
                ),
            )),
            None => Err(ArgumentError::new("map", "unable to determine the best matching node in an empty map")),
        }
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height { Some(y * self.width + x) } else { None }
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> ! {
        panic!("position ({x}, {y}) is out of map bounds {}x{}", self.width, self.height)
    }
}

impl Index<(usize, usize)> for Map {
    type Output = MapNode;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        let idx = self.index_of(x, y).unwrap_or_else(|| self.out_of_bounds(x, y));

        self.nodes[idx].as_ref().unwrap_or_else(|| panic!("map node at ({x}, {y}) is not populated"))
    }
}

impl IndexMut<(usize, usize)> for Map {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let idx = self.index_of(x, y).unwrap_or_else(|| self.out_of_bounds(x, y));

        self.nodes[idx].as_mut().unwrap_or_else(|| panic!("map node at ({x}, {y}) is not populated"))
    }
}
