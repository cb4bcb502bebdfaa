/// Bakta annotation table (.tsv) parsing
///
/// Bakta writes a five line comment preamble (tool, version, database, DOI,
/// URL) followed by a `#`-prefixed header row and one row per feature:
///
/// ```text
/// # Annotated with Bakta
/// # Software: v1.9.4
/// # Database: v5.1, full
/// # DOI: 10.1099/mgen.0.000685
/// # URL: github.com/oschwengers/bakta
/// #Sequence Id	Type	Start	Stop	Strand	Locus Tag	Gene	Product	DbXrefs
/// contig_1	cds	1	1365	+	ABC_00010	dnaA	Chromosomal replication initiator protein DnaA	COG:COG0593, UniRef:UniRef50_P05648
/// ```
use crate::error::{ProchariotError, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use std::path::Path;

/// Number of metadata lines preceding the header row
pub const PREAMBLE_LINES: usize = 5;

pub const SEQUENCE_ID_COLUMN: &str = "Sequence Id";
pub const LOCUS_TAG_COLUMN: &str = "Locus Tag";
pub const GENE_COLUMN: &str = "Gene";
pub const PRODUCT_COLUMN: &str = "Product";
pub const DBXREFS_COLUMN: &str = "DbXrefs";

/// Identifier and name columns that stay text even when they look numeric
const TEXT_COLUMNS: [&str; 4] = [
    SEQUENCE_ID_COLUMN,
    LOCUS_TAG_COLUMN,
    GENE_COLUMN,
    PRODUCT_COLUMN,
];

/// Database cross-references of a feature, keyed by database name
pub type CrossReferences = IndexMap<String, String>;

/// A single normalized cell of the annotation table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
    Mapping(CrossReferences),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Mapping(map) => map.serialize(serializer),
        }
    }
}

/// One row of the annotation table
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    fields: IndexMap<String, Value>,
    cross_references: CrossReferences,
}

impl FeatureRecord {
    /// Value of a column, with the cross-reference column returned as a mapping
    pub fn get(&self, column: &str) -> Option<Value> {
        if column == DBXREFS_COLUMN {
            return Some(Value::Mapping(self.cross_references.clone()));
        }
        self.fields.get(column).cloned()
    }

    fn text(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(Value::as_str)
    }

    pub fn sequence_id(&self) -> Option<&str> {
        self.text(SEQUENCE_ID_COLUMN)
    }

    pub fn locus_tag(&self) -> Option<&str> {
        self.text(LOCUS_TAG_COLUMN)
    }

    /// Gene symbol; `None` for hypothetical proteins and unnamed features
    pub fn gene(&self) -> Option<&str> {
        self.text(GENE_COLUMN).filter(|g| !g.is_empty())
    }

    pub fn product(&self) -> Option<&str> {
        self.text(PRODUCT_COLUMN)
    }

    pub fn cross_references(&self) -> &CrossReferences {
        &self.cross_references
    }
}

/// All features of one Bakta annotation file, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationTable {
    columns: Vec<String>,
    records: Vec<FeatureRecord>,
}

impl AnnotationTable {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Convert a Bakta `DbXrefs` string into a mapping.
///
/// Entries are separated by `", "` and split on their first `:`, so
/// `"GO:GO:0005524"` maps `GO` to `GO:0005524`. Entries without a colon are
/// dropped.
pub fn parse_dbxrefs(dbxrefs: &str) -> CrossReferences {
    let mut map = CrossReferences::new();
    if dbxrefs.is_empty() {
        return map;
    }

    for entry in dbxrefs.split(", ") {
        if let Some((key, value)) = entry.split_once(':') {
            map.insert(key.to_string(), value.to_string());
        }
    }
    map
}

/// Strip the leading `#` and padding Bakta puts on the first header
fn normalize_column_name(name: &str) -> String {
    name.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .to_string()
}

/// Parse a Bakta annotation table from a file
pub fn parse_bakta_tsv<P: AsRef<Path>>(path: P) -> Result<AnnotationTable> {
    let path = path.as_ref();
    tracing::debug!("Parsing Bakta annotation table {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|e| {
        ProchariotError::Parse(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let table = parse_bakta_str(&contents)
        .map_err(|e| match e {
            ProchariotError::Parse(msg) => {
                ProchariotError::Parse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

    tracing::info!(
        "Parsed {} features ({} columns) from {}",
        table.len(),
        table.columns.len(),
        path.display()
    );
    Ok(table)
}

/// Parse a Bakta annotation table already held in memory
pub fn parse_bakta_str(contents: &str) -> Result<AnnotationTable> {
    // Byte offset of the header row
    let mut offset = 0;
    for line_no in 0..PREAMBLE_LINES {
        match contents[offset..].find('\n') {
            Some(idx) => offset += idx + 1,
            None => {
                return Err(ProchariotError::Parse(format!(
                    "expected {} metadata lines and a header, found {} line(s)",
                    PREAMBLE_LINES,
                    line_no + usize::from(offset < contents.len())
                )))
            }
        }
    }
    let body = &contents[offset..];
    if body.trim_end_matches(['\r', '\n']).is_empty() {
        return Err(ProchariotError::Parse(format!(
            "missing header row at line {}",
            PREAMBLE_LINES + 1
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_column_name)
        .collect();

    let dbxrefs_idx = columns
        .iter()
        .position(|c| c == DBXREFS_COLUMN)
        .ok_or_else(|| {
            ProchariotError::Parse(format!(
                "column '{}' not found in header (columns: {})",
                DBXREFS_COLUMN,
                columns.join(", ")
            ))
        })?;

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize + PREAMBLE_LINES)
            .unwrap_or(0);

        if record.len() > columns.len() {
            return Err(ProchariotError::Parse(format!(
                "line {} has {} fields, header has {}",
                line,
                record.len(),
                columns.len()
            )));
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        row.resize(columns.len(), None);
        rows.push(row);
    }

    let integer_columns: Vec<bool> = columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            idx != dbxrefs_idx
                && !TEXT_COLUMNS.contains(&name.as_str())
                && is_integer_column(&rows, idx)
        })
        .collect();

    let records = rows
        .into_iter()
        .map(|row| {
            let mut fields = IndexMap::with_capacity(columns.len() - 1);
            let mut cross_references = CrossReferences::new();

            for (idx, cell) in row.into_iter().enumerate() {
                if idx == dbxrefs_idx {
                    cross_references = cell.as_deref().map(parse_dbxrefs).unwrap_or_default();
                    continue;
                }
                let value = match cell {
                    None => Value::Null,
                    Some(text) if integer_columns[idx] => text
                        .parse::<i64>()
                        .map(Value::Integer)
                        .unwrap_or(Value::Text(text)),
                    Some(text) => Value::Text(text),
                };
                fields.insert(columns[idx].clone(), value);
            }

            FeatureRecord {
                fields,
                cross_references,
            }
        })
        .collect();

    Ok(AnnotationTable { columns, records })
}

/// A column is numeric when every non-empty cell parses as an integer
fn is_integer_column(rows: &[Vec<Option<String>>], idx: usize) -> bool {
    let mut seen = false;
    for cell in rows.iter().filter_map(|row| row[idx].as_deref()) {
        if cell.parse::<i64>().is_err() {
            return false;
        }
        seen = true;
    }
    seen
}
