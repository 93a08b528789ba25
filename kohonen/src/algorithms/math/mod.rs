//! This module contains distance related functionality.

mod distance;
pub use self::distance::*;
