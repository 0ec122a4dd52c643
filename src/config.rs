use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{CalculatorError, Result};
use crate::history::{
    INTEREST_HISTORY_CAPACITY, INTEREST_HISTORY_KEY, POPUP_HISTORY_CAPACITY, POPUP_HISTORY_KEY,
};

/// default artificial delay before an interest result is shown
pub const DEFAULT_CALCULATION_DELAY_MS: u64 = 450;

/// history configuration for one history kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    pub key: String,
    pub capacity: usize,
}

/// application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub interest_history: HistoryConfig,
    pub popup_history: HistoryConfig,
    /// delay between a calculation request and its result
    pub calculation_delay_ms: u64,
    /// file backing the key-value store; in-memory when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interest_history: HistoryConfig {
                key: INTEREST_HISTORY_KEY.to_string(),
                capacity: INTEREST_HISTORY_CAPACITY,
            },
            popup_history: HistoryConfig {
                key: POPUP_HISTORY_KEY.to_string(),
                capacity: POPUP_HISTORY_CAPACITY,
            },
            calculation_delay_ms: DEFAULT_CALCULATION_DELAY_MS,
            storage_path: None,
        }
    }
}

impl AppConfig {
    /// parse from json; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// defaults overridden by environment variables
    /// - INTEREST_DESK_STORAGE: path of the json store file
    /// - INTEREST_DESK_DELAY_MS: calculation delay in milliseconds
    pub fn from_env() -> Result<Self> {
        let mut config = AppConfig::default();

        if let Ok(path) = std::env::var("INTEREST_DESK_STORAGE") {
            if !path.trim().is_empty() {
                config.storage_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(delay) = std::env::var("INTEREST_DESK_DELAY_MS") {
            config.calculation_delay_ms =
                delay.trim().parse().map_err(|_| CalculatorError::InvalidConfiguration {
                    message: format!("INTEREST_DESK_DELAY_MS is not a number: {delay:?}"),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for history in [&self.interest_history, &self.popup_history] {
            if history.capacity == 0 {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("history {:?} must hold at least one entry", history.key),
                });
            }
            if history.key.is_empty() {
                return Err(CalculatorError::InvalidConfiguration {
                    message: "history key must not be empty".to_string(),
                });
            }
        }

        if self.interest_history.key == self.popup_history.key {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("both histories use key {:?}", self.interest_history.key),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.interest_history.key, "interestHistory");
        assert_eq!(config.interest_history.capacity, 5);
        assert_eq!(config.popup_history.key, "popupCalcHistory");
        assert_eq!(config.popup_history.capacity, 10);
        assert_eq!(config.calculation_delay_ms, 450);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = AppConfig::from_json(r#"{"calculation_delay_ms": 0}"#).unwrap();
        assert_eq!(config.calculation_delay_ms, 0);
        assert_eq!(config.popup_history.capacity, 10);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let json = r#"{"interest_history": {"key": "interestHistory", "capacity": 0}}"#;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(CalculatorError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_rejects_shared_key() {
        let mut config = AppConfig::default();
        config.popup_history.key = config.interest_history.key.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AppConfig::from_json("{"),
            Err(CalculatorError::Serialization(_))
        ));
    }
}
