use crate::core::projection::{
    default_essential_columns, AllOf, MaxJsonBytes, MaxRecords, SizingStrategy, Unbounded,
};
use crate::error::ProchariotError;
use crate::llm::LlmConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub projection: ProjectionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Columns sent to the model, in output order
    pub essential_columns: Vec<String>,
    /// Drop features without a gene name (hypothetical proteins etc.)
    pub named_genes_only: bool,
    pub max_records: Option<usize>,
    /// Upper bound on the compact JSON payload in bytes
    pub max_payload_bytes: Option<usize>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            essential_columns: default_essential_columns(),
            named_genes_only: true,
            max_records: None,
            max_payload_bytes: None,
        }
    }
}

impl ProjectionConfig {
    pub fn sizing_strategy(&self) -> Box<dyn SizingStrategy> {
        let mut limits: Vec<Box<dyn SizingStrategy>> = Vec::new();
        if let Some(n) = self.max_records {
            limits.push(Box::new(MaxRecords(n)));
        }
        if let Some(n) = self.max_payload_bytes {
            limits.push(Box::new(MaxJsonBytes(n)));
        }

        match limits.len() {
            0 => Box::new(Unbounded),
            1 => limits.remove(0),
            _ => Box::new(AllOf(limits)),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ProchariotError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| ProchariotError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ProchariotError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ProchariotError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Load `path` if given, else the user config if it exists, else defaults
pub fn resolve_config(path: Option<&Path>) -> Result<Config, ProchariotError> {
    if let Some(path) = path {
        tracing::debug!("Loading config from {}", path.display());
        return load_config(path);
    }

    let default_path = crate::core::paths::config_path();
    if default_path.is_file() {
        tracing::debug!("Loading config from {}", default_path.display());
        load_config(&default_path)
    } else {
        Ok(default_config())
    }
}
