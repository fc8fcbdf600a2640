//! Error types for expression evaluation

use thiserror::Error;

/// Errors that can occur while evaluating an expression
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    /// The right operand of a division was exactly zero
    #[error("Division by zero")]
    DividedByZero,
}

/// Returned when a string is not one of the keypad operator symbols
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator symbol: '{0}'")]
pub struct ParseOperatorError(pub String);
