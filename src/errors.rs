use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("invalid date range: end {end} must be after start {start}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid expression: {message}")]
    Expression {
        message: String,
    },

    #[error("storage error for key {key}: {message}")]
    Storage {
        key: String,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn expression(message: impl Into<String>) -> Self {
        CalculatorError::Expression {
            message: message.into(),
        }
    }

    pub(crate) fn storage(key: &str, message: impl std::fmt::Display) -> Self {
        CalculatorError::Storage {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
