use tracing::{info, warn};

use super::{CalculationRecord, HistoryError, HistoryList};
use crate::storage::KeyValueStore;

/// Reads and writes the calculation history in one slot of a [`KeyValueStore`]
#[derive(Debug)]
pub struct HistoryStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Slot name used unless configured otherwise
    pub const DEFAULT_KEY: &'static str = "calculationHistoryKey";

    /// Use the default slot of `store`
    pub fn new(store: S) -> Self {
        Self::with_key(store, Self::DEFAULT_KEY)
    }

    /// Use slot `key` of `store`
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Slot name
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Give back the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Overwrite the slot with the complete `history`
    pub fn try_save(&mut self, history: &[CalculationRecord]) -> Result<(), HistoryError> {
        if let Some(index) = history.iter().position(|r| !r.is_encodable()) {
            return Err(HistoryError::Encode(format!(
                "record {} contains a non-finite number",
                index
            )));
        }

        let encoded =
            serde_json::to_string(history).map_err(|e| HistoryError::Encode(e.to_string()))?;
        self.store.set(&self.key, encoded)?;

        info!(records = history.len(), key = %self.key, "saved calculation history");
        Ok(())
    }

    /// Overwrite the slot with the complete `history`, ignoring failures
    ///
    /// A history that cannot be encoded or written leaves the slot untouched.
    pub fn save(&mut self, history: &[CalculationRecord]) {
        if let Err(e) = self.try_save(history) {
            warn!("Calculation history not saved: {e}");
        }
    }

    /// Read the slot. An empty slot is an empty history.
    pub fn try_load(&self) -> Result<HistoryList, HistoryError> {
        let Some(encoded) = self.store.get(&self.key)? else {
            return Ok(HistoryList::new());
        };

        let history: HistoryList = serde_json::from_str(&encoded).map_err(HistoryError::Decode)?;

        info!(records = history.len(), key = %self.key, "loaded calculation history");
        Ok(history)
    }

    /// Read the slot, returning an empty history if it is absent or unreadable
    ///
    /// Decoding is all-or-nothing: one bad record discards the whole list.
    pub fn load(&self) -> HistoryList {
        self.try_load().unwrap_or_else(|e| {
            warn!("Calculation history discarded: {e}");
            HistoryList::new()
        })
    }
}
