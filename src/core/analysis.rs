/// End-to-end analysis of a Bakta output directory
use crate::bio::bakta::parse_bakta_tsv;
use crate::core::config::ProjectionConfig;
use crate::core::locator::locate_annotation_table;
use crate::core::projection::{ensure_fits, project, ProjectionPayload};
use crate::error::Result;
use crate::llm::TextGenerator;
use crate::report::{serialize_payload, AnalysisReport};
use std::path::{Path, PathBuf};

pub const TOOL_NAME: &str = "proChariot";

pub const SYSTEM_PROMPT: &str = "You are an expert in prokaryotic genomics and microbial \
    genome annotation. You interpret Bakta annotation tables and write concise, factual \
    analyses for microbiologists. Only draw conclusions supported by the annotations given.";

/// Inputs for one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub input_dir: PathBuf,
    pub species: Option<String>,
    pub note: Option<String>,
    pub projection: ProjectionConfig,
}

/// Annotation payload ready to be embedded in a prompt
#[derive(Debug, Clone)]
pub struct PreparedPayload {
    pub input_file: PathBuf,
    pub total_features: usize,
    pub payload: ProjectionPayload,
    /// Compact JSON encoding of `payload`
    pub json: String,
}

/// Locate, parse, project and serialize the annotation table in `input_dir`
pub fn prepare(input_dir: &Path, projection: &ProjectionConfig) -> Result<PreparedPayload> {
    let input_file = locate_annotation_table(input_dir)?;
    let table = parse_bakta_tsv(&input_file)?;

    let payload = project(
        &table,
        &projection.essential_columns,
        projection.named_genes_only,
    )?;
    ensure_fits(&payload, projection.sizing_strategy().as_ref())?;

    let json = serialize_payload(&payload)?;
    tracing::info!(
        "Prepared {} of {} features ({} bytes of JSON)",
        payload.len(),
        table.len(),
        json.len()
    );

    Ok(PreparedPayload {
        input_file,
        total_features: table.len(),
        payload,
        json,
    })
}

/// User prompt: optional context followed by the annotation JSON
pub fn build_prompt(prepared: &PreparedPayload, species: Option<&str>, note: Option<&str>) -> String {
    let mut lines = vec!["Analyze the following genome annotation produced by Bakta.".to_string()];
    if let Some(species) = species {
        lines.push(format!("Species: {}", species));
    }
    if let Some(note) = note {
        lines.push(format!("Context: {}", note));
    }
    lines.push(format!(
        "The table has {} features; {} are included below with the columns {}.",
        prepared.total_features,
        prepared.payload.len(),
        prepared.payload.columns().join(", ")
    ));
    lines.push(
        "Summarize notable functional categories, antimicrobial resistance and virulence \
         genes, mobile genetic elements, and anything unusual for this organism."
            .to_string(),
    );
    lines.push(String::new());
    lines.push("Annotations (JSON):".to_string());
    lines.push(prepared.json.clone());
    lines.join("\n")
}

/// Run the full pipeline against `generator`
pub fn analyze(request: &AnalysisRequest, generator: &dyn TextGenerator) -> Result<AnalysisReport> {
    let prepared = prepare(&request.input_dir, &request.projection)?;
    let prompt = build_prompt(
        &prepared,
        request.species.as_deref(),
        request.note.as_deref(),
    );

    let analysis = generator.generate(SYSTEM_PROMPT, &prompt)?;
    tracing::info!("Received {} characters from {}", analysis.len(), generator.model());

    Ok(AnalysisReport {
        tool: TOOL_NAME.to_string(),
        version: crate::VERSION.to_string(),
        input_file: prepared.input_file,
        species: request.species.clone(),
        note: request.note.clone(),
        model: generator.model().to_string(),
        total_features: prepared.total_features,
        analyzed_features: prepared.payload.len(),
        columns: prepared.payload.columns().to_vec(),
        analysis,
    })
}
