use std::sync::Arc;

/// Alias to a scalar floating type.
///
/// NOTE: weights, distances and schedule values all share this type, so switching it changes
/// the precision of the whole training run.
pub type Float = f64;

/// A logger used to report training progress.
pub type InfoLogger = Arc<dyn Fn(&str)>;
