#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::{ArgumentError, ArgumentResult, Float};

/// Calculates squared euclidean distance between two vectors of the same length:
/// D = Σ (a[i] - b[i])². The square root is omitted as only relative order matters.
pub fn distance_squared(a: &[Float], b: &[Float]) -> ArgumentResult<Float> {
    if a.len() != b.len() {
        return Err(ArgumentError::new(
            "b",
            format!("unable to calculate the distance between vectors with different lengths: {} and {}", a.len(), b.len()),
        ));
    }

    Ok(a.iter().zip(b.iter()).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    }))
}
