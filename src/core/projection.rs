/// Column/row projection of an annotation table into an LLM-sized payload
use crate::bio::bakta::{AnnotationTable, Value, DBXREFS_COLUMN, GENE_COLUMN, LOCUS_TAG_COLUMN, PRODUCT_COLUMN};
use crate::error::{ProchariotError, Result};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Columns kept when the caller does not name any
pub const DEFAULT_ESSENTIAL_COLUMNS: [&str; 4] =
    [LOCUS_TAG_COLUMN, GENE_COLUMN, PRODUCT_COLUMN, DBXREFS_COLUMN];

pub fn default_essential_columns() -> Vec<String> {
    DEFAULT_ESSENTIAL_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Filtered, column-pruned view of an annotation table.
///
/// Serializes in records orientation: an array with one object per row,
/// keys in whitelist order, missing values as explicit `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPayload {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ProjectionPayload {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

struct Row<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl Serialize for ProjectionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for values in &self.rows {
            seq.serialize_element(&Row {
                columns: &self.columns,
                values,
            })?;
        }
        seq.end()
    }
}

/// Project `table` down to `essential_columns`, optionally keeping only
/// features with a gene name.
pub fn project(
    table: &AnnotationTable,
    essential_columns: &[String],
    named_genes_only: bool,
) -> Result<ProjectionPayload> {
    if essential_columns.is_empty() {
        return Err(ProchariotError::Schema(
            "at least one column must be selected".to_string(),
        ));
    }

    let mut seen = std::collections::HashSet::with_capacity(essential_columns.len());
    let duplicated: Vec<&str> = essential_columns
        .iter()
        .filter(|c| !seen.insert(c.as_str()))
        .map(String::as_str)
        .collect();
    if !duplicated.is_empty() {
        return Err(ProchariotError::Schema(format!(
            "column(s) selected more than once: {}",
            duplicated.join(", ")
        )));
    }

    let missing: Vec<&str> = essential_columns
        .iter()
        .filter(|c| !table.has_column(c))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(ProchariotError::Schema(format!(
            "column(s) not present in annotation table: {} (available: {})",
            missing.join(", "),
            table.columns().join(", ")
        )));
    }

    if named_genes_only && !table.has_column(GENE_COLUMN) {
        return Err(ProchariotError::Schema(format!(
            "cannot filter on gene names without a '{}' column",
            GENE_COLUMN
        )));
    }

    let rows: Vec<Vec<Value>> = table
        .records()
        .iter()
        .filter(|record| !named_genes_only || record.gene().is_some())
        .map(|record| {
            essential_columns
                .iter()
                .map(|column| record.get(column).unwrap_or(Value::Null))
                .collect()
        })
        .collect();

    tracing::debug!(
        "Projected {} of {} features onto {} column(s)",
        rows.len(),
        table.len(),
        essential_columns.len()
    );

    Ok(ProjectionPayload {
        columns: essential_columns.to_vec(),
        rows,
    })
}

/// Decides whether a payload is small enough for the downstream consumer
pub trait SizingStrategy: Send + Sync {
    fn fits(&self, payload: &ProjectionPayload) -> Result<bool>;

    /// Short human readable description used in error messages
    fn describe(&self) -> String;
}

/// Accepts every payload
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl SizingStrategy for Unbounded {
    fn fits(&self, _payload: &ProjectionPayload) -> Result<bool> {
        Ok(true)
    }

    fn describe(&self) -> String {
        "unbounded".to_string()
    }
}

/// Caps the number of features sent
#[derive(Debug, Clone, Copy)]
pub struct MaxRecords(pub usize);

impl SizingStrategy for MaxRecords {
    fn fits(&self, payload: &ProjectionPayload) -> Result<bool> {
        Ok(payload.len() <= self.0)
    }

    fn describe(&self) -> String {
        format!("at most {} features", self.0)
    }
}

/// Caps the size of the compact JSON encoding in bytes
#[derive(Debug, Clone, Copy)]
pub struct MaxJsonBytes(pub usize);

impl SizingStrategy for MaxJsonBytes {
    fn fits(&self, payload: &ProjectionPayload) -> Result<bool> {
        Ok(serde_json::to_vec(payload)?.len() <= self.0)
    }

    fn describe(&self) -> String {
        format!("at most {} bytes of JSON", self.0)
    }
}

/// Every strategy must accept the payload
pub struct AllOf(pub Vec<Box<dyn SizingStrategy>>);

impl SizingStrategy for AllOf {
    fn fits(&self, payload: &ProjectionPayload) -> Result<bool> {
        for strategy in &self.0 {
            if !strategy.fits(payload)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn describe(&self) -> String {
        if self.0.is_empty() {
            return Unbounded.describe();
        }
        self.0
            .iter()
            .map(|s| s.describe())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Fail with `PayloadTooLarge` unless `strategy` accepts the payload
pub fn ensure_fits(payload: &ProjectionPayload, strategy: &dyn SizingStrategy) -> Result<()> {
    if strategy.fits(payload)? {
        Ok(())
    } else {
        Err(ProchariotError::PayloadTooLarge(format!(
            "{} feature(s) exceed the limit of {}; select fewer columns or keep only named genes",
            payload.len(),
            strategy.describe()
        )))
    }
}
