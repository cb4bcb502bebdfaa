pub mod bakta;

pub use bakta::{
    parse_bakta_str, parse_bakta_tsv, parse_dbxrefs, AnnotationTable, CrossReferences,
    FeatureRecord, Value,
};
