//! Core error types for proChariot

use thiserror::Error;

use crate::llm::LlmError;

/// Main error type for proChariot operations
#[derive(Error, Debug)]
pub enum ProchariotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Result type alias for proChariot operations
pub type Result<T> = std::result::Result<T, ProchariotError>;

impl From<serde_json::Error> for ProchariotError {
    fn from(err: serde_json::Error) -> Self {
        ProchariotError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ProchariotError {
    fn from(err: csv::Error) -> Self {
        ProchariotError::Parse(err.to_string())
    }
}

impl ProchariotError {
    /// Process exit code used by the CLI for this class of failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ProchariotError::Configuration(_) => 2,
            ProchariotError::Io(_) | ProchariotError::NotFound(_) => 3,
            ProchariotError::Parse(_)
            | ProchariotError::Schema(_)
            | ProchariotError::Serialization(_)
            | ProchariotError::PayloadTooLarge(_)
            | ProchariotError::InvalidInput(_) => 4,
            ProchariotError::Llm(LlmError::MissingCredential) => 2,
            ProchariotError::Llm(_) => 5,
        }
    }
}
