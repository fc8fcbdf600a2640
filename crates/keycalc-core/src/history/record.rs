use serde::{Deserialize, Serialize};

use crate::expression::{Expression, ExpressionItem};

/// Ordered calculation history, oldest first
pub type HistoryList = Vec<CalculationRecord>;

/// A finished expression and the value it evaluated to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    expression: Expression,
    result: f64,
}

impl CalculationRecord {
    /// Pair a finished expression with its result
    pub fn new(expression: Expression, result: f64) -> Self {
        Self { expression, result }
    }

    /// The evaluated expression
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The value the expression evaluated to
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Result in the same rendering used for expression operands
    pub fn result_string(&self) -> String {
        format!("{:?}", self.result)
    }

    /// JSON has no representation for NaN or infinity
    pub(crate) fn is_encodable(&self) -> bool {
        self.result.is_finite()
            && self
                .expression
                .items()
                .iter()
                .filter_map(ExpressionItem::as_number)
                .all(f64::is_finite)
    }
}
