//! Expression items and their persisted record form

use serde::{Deserialize, Serialize};
use std::fmt;

use super::operator::Operator;

/// One entry of an expression: an operand or a binary operator
///
/// Persists as a single-key record, either `{"number": 1.5}` or
/// `{"operator": "+"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord", into = "ItemRecord")]
pub enum ExpressionItem {
    /// An operand
    Number(f64),
    /// A binary operator
    Operator(Operator),
}

impl ExpressionItem {
    /// The operand value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ExpressionItem::Number(n) => Some(*n),
            ExpressionItem::Operator(_) => None,
        }
    }

    /// The operator, if this is an operator
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            ExpressionItem::Operator(op) => Some(*op),
            ExpressionItem::Number(_) => None,
        }
    }
}

impl fmt::Display for ExpressionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug formatting keeps the fractional part ("5.0") and is round-trip exact
            ExpressionItem::Number(n) => write!(f, "{:?}", n),
            ExpressionItem::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Wire shape of an [`ExpressionItem`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator: Option<String>,
}

impl From<ExpressionItem> for ItemRecord {
    fn from(item: ExpressionItem) -> Self {
        match item {
            ExpressionItem::Number(n) => ItemRecord {
                number: Some(n),
                operator: None,
            },
            ExpressionItem::Operator(op) => ItemRecord {
                number: None,
                operator: Some(op.symbol().to_string()),
            },
        }
    }
}

impl TryFrom<ItemRecord> for ExpressionItem {
    type Error = String;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        if let Some(number) = record.number {
            return Ok(ExpressionItem::Number(number));
        }

        match record.operator {
            Some(symbol) => Operator::from_symbol(&symbol)
                .map(ExpressionItem::Operator)
                .ok_or_else(|| format!("unknown operator symbol '{}'", symbol)),
            None => Err("expression item has neither 'number' nor 'operator'".to_string()),
        }
    }
}
