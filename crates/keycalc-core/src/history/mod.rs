//! Calculation History
//!
//! Finished calculations are kept as an ordered in-memory list and the whole
//! list is rewritten to a single persistent slot after every calculation.
//!
//! ## Slot format
//!
//! ```text
//! [ { "expression": [ {"number": 10.0}, {"operator": "÷"}, {"number": 2.0} ],
//!     "result": 5.0 },
//!   ... ]
//! ```

mod record;
mod store;

pub use record::{CalculationRecord, HistoryList};
pub use store::HistoryStore;

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by the strict history API
#[derive(Error, Debug)]
pub enum HistoryError {
    /// The history could not be turned into JSON
    #[error("Failed to encode history: {0}")]
    Encode(String),

    /// The slot does not hold a valid history
    #[error("Failed to decode history: {0}")]
    Decode(#[source] serde_json::Error),

    /// The key-value store failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
