//! Custom error types for configuration and report handling

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {key}={value} - {reason}")]
    Config {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn config(key: &str, value: &str, reason: impl Into<String>) -> Self {
        EngineError::Config {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
