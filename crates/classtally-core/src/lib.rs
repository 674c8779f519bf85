pub mod aggregate;
pub mod discover;
pub mod extract;
pub mod resolve;
pub mod warning;

pub use aggregate::{Aggregator, AnalysisReport, FileRecord, Summary};
pub use discover::discover_files;
pub use extract::Extractor;
pub use resolve::{IncludeResolver, Resolution, MAX_INCLUDE_DEPTH};
pub use warning::ScanWarning;
