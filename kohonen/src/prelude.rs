//! This module reimports a common used types.

pub use crate::algorithms::math::distance_squared;

pub use crate::algorithms::som::Initializer;
pub use crate::algorithms::som::Map;
pub use crate::algorithms::som::MapBuilder;
pub use crate::algorithms::som::MapInitializer;
pub use crate::algorithms::som::MapNode;
pub use crate::algorithms::som::MapTrainer;
pub use crate::algorithms::som::TelemetryMode;
pub use crate::algorithms::som::Trainer;
pub use crate::algorithms::som::TrainerConfig;
pub use crate::algorithms::som::Vector;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::{ArgumentError, ArgumentResult};
pub use crate::utils::{Random, RandomGen};
