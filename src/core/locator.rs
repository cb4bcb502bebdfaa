/// Locating the annotation table inside a Bakta output directory
use crate::error::{ProchariotError, Result};
use std::path::{Path, PathBuf};

/// Bakta side tables that share the `.tsv` extension with the main table
const AUXILIARY_SUFFIXES: [&str; 2] = [".hypotheticals.tsv", ".inference.tsv"];

fn is_annotation_table(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".tsv") && !AUXILIARY_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Find the single main annotation `.tsv` in `dir`
pub fn locate_annotation_table<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ProchariotError::NotFound(format!(
            "input directory {} does not exist or is not a directory",
            dir.display()
        )));
    }

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_annotation_table(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(ProchariotError::NotFound(format!(
            "no Bakta annotation table (*.tsv) in {}",
            dir.display()
        ))),
        1 => {
            let path = candidates.remove(0);
            tracing::debug!("Using annotation table {}", path.display());
            Ok(path)
        }
        _ => Err(ProchariotError::InvalidInput(format!(
            "multiple annotation tables in {}: {}",
            dir.display(),
            candidates
                .iter()
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_main_table_among_bakta_outputs() {
        let dir = TempDir::new().unwrap();
        for name in [
            "assembly.tsv",
            "assembly.hypotheticals.tsv",
            "assembly.inference.tsv",
            "assembly.gff3",
            "assembly.json",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let found = locate_annotation_table(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("assembly.tsv"));
    }

    #[test]
    fn test_no_table() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("assembly.gbff"), "").unwrap();

        let err = locate_annotation_table(dir.path()).unwrap_err();
        assert!(matches!(err, ProchariotError::NotFound(_)));
    }

    #[test]
    fn test_ambiguous_tables() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.tsv"), "").unwrap();
        fs::write(dir.path().join("b.tsv"), "").unwrap();

        let err = locate_annotation_table(dir.path()).unwrap_err();
        assert!(matches!(err, ProchariotError::InvalidInput(ref msg) if msg.contains("a.tsv, b.tsv")));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = locate_annotation_table(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ProchariotError::NotFound(_)));
    }
}
