//! Input validation error types.

use thiserror::Error;

/// Errors that can occur while reading action inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required input was not supplied.
    #[error("Input required and not supplied: {name}")]
    Missing { name: &'static str },

    /// A boolean input had an unrecognized value.
    #[error("Input '{name}' must be one of true|True|TRUE|false|False|FALSE, got '{value}'")]
    InvalidBoolean { name: &'static str, value: String },

    /// A numeric input was not a positive integer.
    #[error("Input '{name}' must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}
