//! Core error types for syscalc.
//!
//! `CalculationError` is the taxonomy every calculation module reports. It is
//! always recovered locally and rendered as a result string; it never escapes
//! a module's `calculate`. `Error` covers the session and configuration layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalculationError),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors produced by a calculation module for a single input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid characters in expression")]
    InvalidCharacters,

    #[error("Malformed expression")]
    MalformedExpression,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Expected {expected} comma-separated values ({usage}), got {found}")]
    WrongArity {
        expected: usize,
        found: usize,
        usage: &'static str,
    },

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Angle must be between 0 and 90 degrees, got {0}")]
    AngleOutOfRange(f64),

    #[error("Speed must not be negative, got {0}")]
    NegativeSpeed(f64),
}

impl CalculationError {
    /// Renders the error as the final text shown to the user and stored in history.
    pub fn to_display_text(&self) -> String {
        format!("Error: {}", self)
    }
}
