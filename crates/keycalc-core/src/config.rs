//! Calculator configuration stored in a JSON file
//!
//! Every field is optional in the file; missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::format::NumberFormat;
use crate::history::HistoryStore;
use crate::storage::{FileStore, MemoryStore};

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid configuration JSON
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Calculator behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Preferences slot holding the calculation history
    pub history_key: String,

    /// Shown on the display after a failed evaluation
    pub error_token: String,

    /// Maximum fraction digits shown on the display
    pub max_fraction_digits: usize,

    /// Preferences file; `None` uses the platform data directory
    pub store_path: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_key: HistoryStore::<MemoryStore>::DEFAULT_KEY.to_string(),
            error_token: "Error".to_string(),
            max_fraction_digits: NumberFormat::default().max_fraction_digits,
            store_path: None,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Display formatter built from these settings
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.max_fraction_digits)
    }

    /// Resolved preferences file path
    pub fn store_path(&self) -> io::Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => FileStore::default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.history_key, "calculationHistoryKey");
        assert_eq!(config.error_token, "Error");
        assert_eq!(config.max_fraction_digits, 3);
        assert!(config.store_path.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{ "error_token": "Ошибка" }"#).unwrap();
        assert_eq!(config.error_token, "Ошибка");
        assert_eq!(config.history_key, "calculationHistoryKey");
        assert_eq!(config.max_fraction_digits, 3);
    }

    #[test]
    fn test_explicit_store_path() {
        let config = CalculatorConfig {
            store_path: Some(PathBuf::from("/tmp/prefs.json")),
            ..CalculatorConfig::default()
        };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/prefs.json"));
    }
}
