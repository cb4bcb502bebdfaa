pub mod analysis;
pub mod config;
pub mod locator;
pub mod paths;
pub mod projection;

pub use analysis::{analyze, prepare, AnalysisRequest, PreparedPayload};
pub use config::{Config, ProjectionConfig};
pub use locator::locate_annotation_table;
pub use projection::{project, ProjectionPayload, SizingStrategy};
