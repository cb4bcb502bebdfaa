/// Parse → project → serialize behaviour on Bakta tables
mod common;

use pretty_assertions::assert_eq;
use prochariot::bio::bakta::{parse_bakta_tsv, parse_dbxrefs, CrossReferences};
use prochariot::core::projection::{default_essential_columns, project};
use prochariot::report::serialize_payload;
use prochariot::ProchariotError;
use proptest::prelude::*;

use common::*;

fn map(pairs: &[(&str, &str)]) -> CrossReferences {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_dna_a_example() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("assembly.tsv", &dna_a_table());

    let table = parse_bakta_tsv(&path).unwrap();
    assert_eq!(table.len(), 2);

    let a = &table.records()[0];
    let b = &table.records()[1];
    assert_eq!(
        a.cross_references(),
        &map(&[("UniProt", "P0AEQ4"), ("COG", "COG0593")])
    );
    assert_eq!(b.cross_references(), &CrossReferences::new());

    let payload = project(&table, &default_essential_columns(), true).unwrap();
    assert_eq!(payload.len(), 1);

    let json = serialize_payload(&payload).unwrap();
    assert!(json.starts_with(r#"[{"Locus Tag":"EFAE_00010","Gene":"dnaA""#));

    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["Gene"], "dnaA");
    assert_eq!(parsed[0]["DbXrefs"]["COG"], "COG0593");
}

#[test]
fn test_all_genes_keeps_every_row() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("assembly.tsv", &dna_a_table());
    let table = parse_bakta_tsv(&path).unwrap();

    let payload = project(&table, &default_essential_columns(), false).unwrap();
    assert_eq!(payload.len(), table.len());

    let json = serialize_payload(&payload).unwrap();
    let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(&json).unwrap();

    // Missing values stay as explicit nulls
    assert!(parsed[1].contains_key("Gene"));
    assert!(parsed[1]["Gene"].is_null());
    assert_eq!(parsed[1]["DbXrefs"], serde_json::json!({}));
}

#[test]
fn test_serialized_keys_match_whitelist() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("assembly.tsv", &dna_a_table());
    let table = parse_bakta_tsv(&path).unwrap();

    let columns: Vec<String> = ["Product", "Start", "Sequence Id"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let payload = project(&table, &columns, false).unwrap();
    let json = serialize_payload(&payload).unwrap();

    assert_eq!(
        json,
        r#"[{"Product":"Chromosomal replication initiator protein DnaA","Start":1,"Sequence Id":"contig_1"},{"Product":"hypothetical protein","Start":1530,"Sequence Id":"contig_1"}]"#
    );
}

#[test]
fn test_repeated_column_is_schema_error() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("assembly.tsv", &dna_a_table());
    let table = parse_bakta_tsv(&path).unwrap();

    let result = project(&table, &["Gene".to_string(), "Gene".to_string()], true);
    assert!(matches!(result, Err(ProchariotError::Schema(_))));
}

#[test]
fn test_numeric_gene_name_survives_named_filter() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file(
        "assembly.tsv",
        &bakta_table(&["contig_1\tcds\t1\t90\t+\tEFAE_00010\t123\tputative protein\t"]),
    );
    let table = parse_bakta_tsv(&path).unwrap();

    let payload = project(&table, &["Gene".to_string()], true).unwrap();
    assert_eq!(serialize_payload(&payload).unwrap(), r#"[{"Gene":"123"}]"#);
}

#[test]
fn test_malformed_input_fails_without_partial_table() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("short.tsv", "# one\n# two\n# three\n# four\n");

    let result = parse_bakta_tsv(&path);
    assert!(matches!(result, Err(ProchariotError::Parse(_))));
}

#[test]
fn test_missing_file_is_parse_error() {
    let env = TestEnvironment::new();
    let result = parse_bakta_tsv(env.path("absent.tsv"));
    assert!(matches!(result, Err(ProchariotError::Parse(ref msg)) if msg.contains("absent.tsv")));
}

#[test]
fn test_unknown_column_is_schema_error() {
    let env = TestEnvironment::new();
    let path = env.write_bakta_file("assembly.tsv", &dna_a_table());
    let table = parse_bakta_tsv(&path).unwrap();

    let result = project(&table, &["Gene".to_string(), "KEGG".to_string()], true);
    assert!(matches!(result, Err(ProchariotError::Schema(_))));
}

proptest! {
    #[test]
    fn prop_dbxrefs_pairs_round_trip(
        pairs in proptest::collection::btree_map("[A-Za-z][A-Za-z0-9_]{0,8}", "[A-Za-z0-9_.:]{1,12}", 0..6)
    ) {
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(", ");

        let parsed = parse_dbxrefs(&joined);
        prop_assert_eq!(parsed.len(), pairs.len());
        for (k, v) in &pairs {
            prop_assert_eq!(parsed.get(k), Some(v));
        }
    }

    #[test]
    fn prop_named_genes_only_never_yields_unnamed(genes in proptest::collection::vec(proptest::option::of("[a-z]{3}[A-Z]?"), 0..20)) {
        let rows: Vec<String> = genes
            .iter()
            .enumerate()
            .map(|(i, gene)| format!(
                "contig_1\tcds\t{}\t{}\t+\tT_{:05}\t{}\tprotein\t",
                i * 100 + 1,
                i * 100 + 90,
                i,
                gene.as_deref().unwrap_or("")
            ))
            .collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let table = prochariot::bio::bakta::parse_bakta_str(&bakta_table(&row_refs)).unwrap();

        let named = project(&table, &["Gene".to_string()], true).unwrap();
        prop_assert_eq!(named.len(), genes.iter().filter(|g| g.is_some()).count());
        for row in named.rows() {
            prop_assert!(!row[0].is_null());
        }

        let all = project(&table, &["Gene".to_string()], false).unwrap();
        prop_assert_eq!(all.len(), genes.len());
    }
}
