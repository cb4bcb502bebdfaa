pub mod json;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use json::{serialize_payload, to_json_pretty};

/// Final output of an analysis run, printed to stdout as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub tool: String,
    pub version: String,
    pub input_file: PathBuf,
    pub species: Option<String>,
    pub note: Option<String>,
    pub model: String,
    /// Features in the annotation table
    pub total_features: usize,
    /// Features sent to the model after filtering
    pub analyzed_features: usize,
    pub columns: Vec<String>,
    pub analysis: String,
}
