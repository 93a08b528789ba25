#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/state_test.rs"]
mod state_test;

use super::*;
use crate::algorithms::math::distance_squared;
use std::fmt::{Display, Formatter, Result, Write};

/// Represents state of the map.
pub struct MapState {
    /// Shape of the map as (width, height, depth).
    pub shape: (usize, usize, usize),
    /// Populated nodes of the map in row-major order.
    pub nodes: Vec<NodeState>,
}

/// Contains information about map node state.
pub struct NodeState {
    /// Node coordinate in the lattice.
    pub coordinate: (usize, usize),
    /// Unified distance: mean euclidean weight distance to populated 4-connected neighbours.
    pub unified_distance: Float,
    /// Node weights.
    pub weights: Vec<Float>,
}

/// Gets map state.
pub fn get_map_state(map: &Map) -> MapState {
    let nodes = map
        .iter()
        .map(|node| {
            let (x, y) = (node.x(), node.y());
            let neighbours = [
                x.checked_sub(1).map(|x| (x, y)),
                Some((x + 1, y)),
                y.checked_sub(1).map(|y| (x, y)),
                Some((x, y + 1)),
            ];

            let (sum, count) = neighbours
                .into_iter()
                .flatten()
                .filter_map(|(x, y)| map.get(x, y))
                .filter_map(|neighbour| distance_squared(node.weights(), neighbour.weights()).ok())
                .fold((0., 0), |(sum, count), distance| (sum + distance.sqrt(), count + 1));

            NodeState {
                coordinate: (x, y),
                unified_distance: if count > 0 { sum / count as Float } else { 0. },
                weights: node.weights().to_vec(),
            }
        })
        .collect();

    MapState { shape: (map.width(), map.height(), map.depth()), nodes }
}

impl Display for MapState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // NOTE a compact single line representation which is easy to embed into other text formats
        let nodes = self.nodes.iter().try_fold(String::new(), |mut res, n| {
            let (x, y) = n.coordinate;
            let weights = n.weights.iter().map(|w| format!("{w:.7}")).collect::<Vec<_>>().join(",");

            write!(&mut res, "({x},{y},{:.7},[{weights}]),", n.unified_distance)?;

            Ok::<_, std::fmt::Error>(res)
        })?;

        write!(f, "({},{},{},[{}])", self.shape.0, self.shape.1, self.shape.2, nodes)
    }
}
