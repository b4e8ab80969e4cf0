//! Error types for the sentiment pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-item data errors
///
/// These never abort a pipeline run. The aggregator records the offending
/// item and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataError {
    #[error("Unparseable timestamp '{value}': {reason}")]
    UnparseableTimestamp { value: String, reason: String },
}

impl DataError {
    pub fn unparseable_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        DataError::UnparseableTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Pipeline-wide error type
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SentimentError {
    pub fn config(msg: impl Into<String>) -> Self {
        SentimentError::Config(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        SentimentError::Parse(msg.into())
    }
}

/// Result type alias for pipeline operations
pub type SentimentResult<T> = Result<T, SentimentError>;
