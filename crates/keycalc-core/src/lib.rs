//! # KeyCalc Core Library
//!
//! Core functionality for the KeyCalc keypad calculator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - An expression model of alternating operands and operators
//! - Strict left-to-right evaluation (no operator precedence)
//! - Calculation history persisted to a key-value store
//! - A keypad session that turns key presses into display text
//!
//! The front-end (GUI, terminal, ...) forwards key presses to a
//! [`session::Session`] and renders its display and history.
//!
//! ## Example
//!
//! ```rust
//! use keycalc_core::prelude::*;
//!
//! let mut session = Session::new(MemoryStore::new());
//! for ch in "10÷2+3=".chars() {
//!     session.press_key(Key::from_char(ch).unwrap()).unwrap();
//! }
//!
//! assert_eq!(session.display(), "8");
//! assert_eq!(session.history()[0].expression, "10.0 ÷ 2.0 + 3.0");
//! ```

pub mod config;
pub mod expression;
pub mod format;
pub mod history;
pub mod session;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::expression::{CalculationError, Expression, ExpressionItem, Operator};
    pub use crate::format::NumberFormat;
    pub use crate::history::{CalculationRecord, HistoryList, HistoryStore};
    pub use crate::session::{HistoryEntry, InputState, Key, Session};
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
