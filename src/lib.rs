pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod models;

pub use analysis::{analyze, Analysis, AnalysisConfig, MenuReport};
pub use error::{DatasetError, MenuError, Result, RowError};
pub use models::{AnalyzedItem, MenuItem};
