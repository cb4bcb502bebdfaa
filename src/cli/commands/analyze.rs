use crate::cli::output::*;
use crate::core::analysis::{analyze, prepare, AnalysisRequest};
use crate::core::config::{resolve_config, Config};
use crate::error::ProchariotError;
use crate::llm::{GroqClient, LlmError};
use crate::report::to_json_pretty;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the Bakta output directory
    #[arg(short = 'i', long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Name of the species (e.g., "Enterococcus faecium")
    #[arg(short, long)]
    pub species: Option<String>,

    /// A short note for context (e.g., "Clinical isolate")
    #[arg(short, long)]
    pub note: Option<String>,

    /// Configuration file (defaults to $PROCHARIOT_HOME/config.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model identifier passed to the LLM API
    #[arg(short, long)]
    pub model: Option<String>,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Columns sent to the model, comma separated
    #[arg(long, value_delimiter = ',', value_name = "COLUMNS")]
    pub columns: Option<Vec<String>>,

    /// Include features without a gene name
    #[arg(long)]
    pub all_genes: bool,

    /// Fail if more than this many features would be sent
    #[arg(long, value_name = "N")]
    pub max_records: Option<usize>,

    /// Fail if the JSON payload would exceed this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_payload_bytes: Option<usize>,

    /// Print the annotation payload instead of calling the LLM
    #[arg(long)]
    pub payload_only: bool,
}

impl AnalyzeArgs {
    /// Command line flags take precedence over the config file
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(model) = &self.model {
            config.llm.model = model.clone();
        }
        if let Some(columns) = &self.columns {
            config.projection.essential_columns = columns
                .iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
        }
        if self.all_genes {
            config.projection.named_genes_only = false;
        }
        if self.max_records.is_some() {
            config.projection.max_records = self.max_records;
        }
        if self.max_payload_bytes.is_some() {
            config.projection.max_payload_bytes = self.max_payload_bytes;
        }
    }
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    status(&format!("Starting analysis on: {}", args.input_dir.display()));

    let mut config = resolve_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    if args.payload_only {
        let prepared = prepare(&args.input_dir, &config.projection)?;
        tree_item(false, "Annotation table", &prepared.input_file.display().to_string());
        tree_item(
            true,
            "Features",
            &format!("{} of {}", prepared.payload.len(), prepared.total_features),
        );
        if prepared.payload.is_empty() {
            warning("No features matched the projection");
        }
        println!("{}", prepared.json);
        return Ok(());
    }

    let api_key = args
        .api_key
        .clone()
        .ok_or(ProchariotError::Llm(LlmError::MissingCredential))?;
    let client = GroqClient::new(config.llm.clone(), api_key).map_err(ProchariotError::from)?;

    let request = AnalysisRequest {
        input_dir: args.input_dir.clone(),
        species: args.species.clone(),
        note: args.note.clone(),
        projection: config.projection.clone(),
    };

    let spinner = create_spinner(&format!("Waiting for {}...", config.llm.model));
    let result = analyze(&request, &client);
    spinner.finish_and_clear();
    let report = result?;
    if report.analyzed_features == 0 {
        warning("No features matched the projection; the model saw an empty table");
    }

    println!("{}", to_json_pretty(&report)?);
    success(&format!(
        "Analyzed {} of {} features with {}",
        report.analyzed_features, report.total_features, report.model
    ));
    Ok(())
}
