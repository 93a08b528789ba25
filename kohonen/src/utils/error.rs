#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// An error raised when an operation is called with an argument which violates its precondition:
/// an empty required collection or a vector whose length differs from the expected depth.
///
/// Such errors signal a usage bug, so there is nothing to retry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentError {
    parameter: String,
    message: String,
}

/// A type alias for result type with `ArgumentError`.
pub type ArgumentResult<T> = Result<T, ArgumentError>;

impl ArgumentError {
    /// Creates a new instance of `ArgumentError` for the given parameter name.
    pub fn new(parameter: &str, message: impl Into<String>) -> Self {
        Self { parameter: parameter.to_string(), message: message.into() }
    }

    /// Returns a name of the offending parameter.
    pub fn parameter(&self) -> &str {
        self.parameter.as_str()
    }

    /// Returns a human-readable description of the violated precondition.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Display for ArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (parameter: {})", self.message, self.parameter)
    }
}

impl std::error::Error for ArgumentError {}
