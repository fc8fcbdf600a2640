//! Binary operators available on the keypad

use std::fmt;
use std::str::FromStr;

use super::error::{CalculationError, ParseOperatorError};

/// Binary operators
///
/// Each operator is bound to the symbol printed on its key. The same symbol is
/// used when the operator is persisted in the calculation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`, fails on a zero divisor
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Key symbol. Subtract uses U+2212 MINUS SIGN, not the ASCII hyphen.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "\u{2212}",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Look up an operator by its key symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator to two operands
    ///
    /// Only [`Operator::Divide`] can fail, and only when `rhs` is exactly zero.
    pub fn calculate(self, lhs: f64, rhs: f64) -> Result<f64, CalculationError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalculationError::DividedByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}
