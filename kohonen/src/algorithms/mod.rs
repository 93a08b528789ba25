//! This module contains algorithms used to build and train the map.

pub mod math;
pub mod som;
