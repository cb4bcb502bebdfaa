//! Text-generation backends
//!
//! The analysis pipeline only depends on the [`TextGenerator`] trait; the
//! Groq client is the production implementation. Credentials are passed in by
//! the caller, never read from the environment here.

pub mod groq;

use serde::{Deserialize, Serialize};

pub use groq::GroqClient;

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// LLM configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: None,
            timeout_secs: 120,
        }
    }
}

/// LLM errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("no API key provided; pass --api-key or set GROQ_API_KEY")]
    MissingCredential,

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("LLM returned empty response")]
    EmptyResponse,
}

/// Anything that turns a prompt into free text
pub trait TextGenerator: Send + Sync {
    /// Model identifier reported alongside the output
    fn model(&self) -> &str;

    fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, LlmError>;
}
