#[cfg(test)]
#[path = "../../../tests/unit/algorithms/som/trainer_test.rs"]
mod trainer_test;

use super::*;

/// A map trainer configuration.
#[derive(Clone)]
pub struct TrainerConfig {
    /// Initial learning rate, decays exponentially towards `learning_rate / e`.
    pub learning_rate: Float,
    /// Amount of passes over the whole training data.
    pub iterations: usize,
    /// Specifies how training progress is reported.
    pub telemetry_mode: TelemetryMode,
}

impl TrainerConfig {
    /// Checks that the learning rate is in (0, 1] range and that there is at least one iteration.
    pub fn validate(&self) -> ArgumentResult<()> {
        let learning_rate = self.learning_rate;
        if !(learning_rate.is_finite() && learning_rate > 0. && learning_rate <= 1.) {
            return Err(ArgumentError::new(
                "learning_rate",
                format!("learning rate should be in (0, 1] range, got {learning_rate}"),
            ));
        }

        if self.iterations == 0 {
            return Err(ArgumentError::new("iterations", "amount of iterations should be positive"));
        }

        Ok(())
    }
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self { learning_rate: 0.02, iterations: 100, telemetry_mode: TelemetryMode::None }
    }
}

/// Trains a map using the online Kohonen algorithm.
///
/// On every iteration, each training vector in the given order pulls its best matching node and
/// the nodes within the neighborhood radius towards itself. Nodes are adjusted immediately, so the
/// later vectors of the same iteration see already updated weights. Both the learning rate and the
/// neighborhood radius decay exponentially over iterations.
#[derive(Default)]
pub struct MapTrainer {
    config: TrainerConfig,
}

impl MapTrainer {
    /// Creates a new instance of `MapTrainer`.
    ///
    /// The configuration is used as is: call [`TrainerConfig::validate`] or build the map with
    /// [`MapBuilder`] to reject out of range values. Zero iterations leave the map untouched.
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }
}

impl Trainer for MapTrainer {
    fn train(&self, map: &mut Map, training_data: &[Vector]) -> ArgumentResult<()> {
        check_depth(training_data, map.depth(), "training_data")?;

        let telemetry = Telemetry::new(self.config.telemetry_mode.clone());
        let start_learning_rate = self.config.learning_rate;
        let iterations = self.config.iterations;

        telemetry.on_start((map.width(), map.height(), map.depth()), training_data.len(), iterations);

        // NOTE integer division is intended: a 3x3 map has the lattice radius of 1
        let lattice_radius = (map.width().max(map.height()) / 2) as Float;
        if lattice_radius < 1. || map.width() == 0 || map.height() == 0 {
            telemetry.on_skip((map.width(), map.height()), lattice_radius);
            return Ok(());
        }

        // NOTE for the radius of 1 the logarithm is zero: the time constant becomes infinite
        // and the neighborhood radius stays constant
        let time_constant = iterations as Float / lattice_radius.ln();
        let mut learning_rate = start_learning_rate;

        for iteration in 0..iterations {
            let neighborhood = Neighborhood::new(lattice_radius * (-(iteration as Float) / time_constant).exp());

            telemetry.on_iteration(iteration, learning_rate, neighborhood.radius);

            training_data
                .iter()
                .try_for_each(|input| adjust_neighborhood(map, input.as_slice(), &neighborhood, learning_rate))?;

            learning_rate = start_learning_rate * (-((iteration + 1) as Float) / iterations as Float).exp();
        }

        telemetry.on_finish(iterations);

        Ok(())
    }
}

struct Neighborhood {
    radius: Float,
    radius_squared: Float,
    diameter: Float,
}

impl Neighborhood {
    fn new(radius: Float) -> Self {
        Self { radius, radius_squared: radius * radius, diameter: radius * 2. }
    }
}

/// Pulls the best matching node of the input and its lattice neighbours towards the input.
fn adjust_neighborhood(
    map: &mut Map,
    input: &[Float],
    neighborhood: &Neighborhood,
    learning_rate: Float,
) -> ArgumentResult<()> {
    let bmu = map.get_best_matching_node(input)?.clone();

    // the square box over-approximates the circular neighborhood, the corners are filtered below
    let start_x = (bmu.x() as Float - neighborhood.radius - 1.).max(0.) as usize;
    let start_y = (bmu.y() as Float - neighborhood.radius - 1.).max(0.) as usize;
    let end_x = (start_x as Float + neighborhood.diameter + 1.).min(map.width() as Float) as usize;
    let end_y = (start_y as Float + neighborhood.diameter + 1.).min(map.height() as Float) as usize;

    for y in start_y..end_y {
        for x in start_x..end_x {
            let node = &mut map[(x, y)];
            let distance = bmu.distance_squared_lattice(node);

            if distance <= neighborhood.radius_squared {
                let falloff = (-distance / (2. * neighborhood.radius_squared)).exp();
                node.adjust_weights(input, learning_rate, falloff)?;
            }
        }
    }

    Ok(())
}
