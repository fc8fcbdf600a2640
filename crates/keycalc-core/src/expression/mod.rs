//! Expression Model
//!
//! A calculator expression is an alternating sequence of operands and binary
//! operators, collected between "clear" events and reduced strictly left to
//! right. There is no precedence: `10 ÷ 2 + 3 × 2` is `((10 ÷ 2) + 3) × 2`.

mod error;
mod item;
mod operator;

pub use error::{CalculationError, ParseOperatorError};
pub use item::ExpressionItem;
pub use operator::Operator;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Ordered sequence of [`ExpressionItem`]s
///
/// The builder methods do not enforce alternation; the caller is expected to
/// push `Number, Operator, Number, ...`. Evaluation tolerates anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression {
    items: Vec<ExpressionItem>,
}

impl Expression {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an operand
    pub fn append_number(&mut self, value: f64) {
        self.items.push(ExpressionItem::Number(value));
    }

    /// Push an operator
    pub fn append_operator(&mut self, op: Operator) {
        self.items.push(ExpressionItem::Operator(op));
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order
    pub fn items(&self) -> &[ExpressionItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item has been pushed
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reduce the expression to a single value, left to right
    ///
    /// - An empty expression, or one that does not start with a number,
    ///   evaluates to `0.0`.
    /// - After the first number, items are read as `(Operator, Number)` pairs.
    ///   The walk stops at the first pair that does not have that shape and
    ///   returns the value accumulated so far.
    /// - Dividing by exactly zero aborts with [`CalculationError::DividedByZero`].
    pub fn evaluate(&self) -> Result<f64, CalculationError> {
        let Some(ExpressionItem::Number(first)) = self.items.first() else {
            debug!(len = self.items.len(), "expression has no leading number, evaluating to 0");
            return Ok(0.0);
        };

        let mut running = *first;

        for (pair_index, pair) in self.items[1..].chunks(2).enumerate() {
            let (op, rhs) = match pair {
                [ExpressionItem::Operator(op), ExpressionItem::Number(rhs)] => (*op, *rhs),
                _ => {
                    debug!(
                        index = 1 + pair_index * 2,
                        "malformed operator/operand pair, stopping evaluation"
                    );
                    break;
                }
            };

            running = op.calculate(running, rhs)?;
        }

        Ok(running)
    }

    /// Render the items separated by single spaces, e.g. `10.0 ÷ 2.0 + 3.0`
    pub fn display_string(&self) -> String {
        self.items
            .iter()
            .map(ExpressionItem::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<Vec<ExpressionItem>> for Expression {
    fn from(items: Vec<ExpressionItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<ExpressionItem> for Expression {
    fn from_iter<I: IntoIterator<Item = ExpressionItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a ExpressionItem;
    type IntoIter = std::slice::Iter<'a, ExpressionItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
