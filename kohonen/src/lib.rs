//! This crate provides a Self-Organizing Map (also known as Kohonen map): a rectangular lattice
//! of nodes which are trained by competitive, neighborhood-weighted learning so that the lattice
//! topology approximates the distribution of the training data.
//!
//! # Examples
//!
//! ```
//! use kohonen::prelude::*;
//!
//! let training_data: Vec<Vector> = vec![vec![255., 0., 0.], vec![0., 255., 0.], vec![0., 0., 255.]];
//!
//! let mut map = Map::new(8, 8, 3);
//! map.train(&training_data).expect("training data has map depth");
//!
//! let node = map.get_best_matching_node(&[250., 10., 5.]).expect("map is trained");
//! assert!(node.x() < map.width() && node.y() < map.height());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod utils;
