#![allow(dead_code)]
//! Common test utilities for proChariot tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BAKTA_PREAMBLE: &str = "# Annotated with Bakta\n\
# Software: v1.9.4\n\
# Database: v5.1, full\n\
# DOI: 10.1099/mgen.0.000685\n\
# URL: github.com/oschwengers/bakta\n";

pub const BAKTA_HEADER: &str =
    "#Sequence Id\tType\tStart\tStop\tStrand\tLocus Tag\tGene\tProduct\tDbXrefs\n";

/// Build a Bakta table from data rows (tab separated, no trailing newline)
pub fn bakta_table(rows: &[&str]) -> String {
    let mut content = String::from(BAKTA_PREAMBLE);
    content.push_str(BAKTA_HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Two features: a named gene with cross-references and an unnamed one
pub fn dna_a_table() -> String {
    bakta_table(&[
        "contig_1\tcds\t1\t1365\t+\tEFAE_00010\tdnaA\tChromosomal replication initiator protein DnaA\tUniProt:P0AEQ4, COG:COG0593",
        "contig_1\tcds\t1530\t2678\t+\tEFAE_00020\t\thypothetical protein\t",
    ])
}

/// Temporary Bakta output directory plus an isolated proChariot home
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub bakta_dir: PathBuf,
    pub home: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bakta_dir = temp_dir.path().join("bakta");
        let home = temp_dir.path().join("home");
        fs::create_dir_all(&bakta_dir).expect("Failed to create bakta dir");
        fs::create_dir_all(&home).expect("Failed to create home dir");

        TestEnvironment {
            temp_dir,
            bakta_dir,
            home,
        }
    }

    /// Write a file into the Bakta output directory
    pub fn write_bakta_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.bakta_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Populate the directory the way a Bakta run does
    pub fn with_bakta_run(self, table: &str) -> Self {
        self.write_bakta_file("assembly.tsv", table);
        self.write_bakta_file("assembly.hypotheticals.tsv", "");
        self.write_bakta_file("assembly.gff3", "##gff-version 3\n");
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}
