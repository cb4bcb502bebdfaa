//! proChariot: LLM-guided analysis of prokaryotic genome annotations.
//!
//! Reads a Bakta output directory, normalizes the annotation table, projects
//! it to a size-bounded JSON payload and hands that to a text-generation
//! backend.

pub mod bio;
pub mod cli;
pub mod core;
pub mod error;
pub mod llm;
pub mod report;

pub use crate::bio::bakta::{parse_bakta_tsv, AnnotationTable, FeatureRecord};
pub use crate::core::analysis::analyze;
pub use crate::error::{ProchariotError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
