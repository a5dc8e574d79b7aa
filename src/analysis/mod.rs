pub mod classify;
pub mod config;
pub mod constants;
pub mod metrics;
pub mod records;
pub mod report;
pub mod validation;

pub use classify::{classify, Classification, ResolvedThresholds, Segments};
pub use config::{AnalysisConfig, PopularityCutoff, ScoreWeights, Thresholds};
pub use metrics::{average_rating, compute_metrics, enrich, popularity_score};
pub use records::{build_dataset, Dataset};
pub use report::{build_report, MenuReport};
pub use validation::validate_row;

use tracing::info;

use crate::error::{DatasetError, RowError};
use crate::models::RawRow;

/// Outcome of a full run: the report plus the rows that were left out.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: MenuReport,
    pub rejected: Vec<RowError>,
}

/// Run validation, metric derivation, classification and report building.
pub fn analyze(rows: &[RawRow], config: &AnalysisConfig) -> Result<Analysis, DatasetError> {
    let dataset = build_dataset(rows)?;
    let enriched = enrich(&dataset, &config.weights);
    let classification = classify(&enriched, &config.thresholds);
    let report = build_report(&classification, config.weights);

    info!(
        popular = report.popular.len(),
        underrated = report.underrated.len(),
        unprofitable = report.unprofitable.len(),
        "analysis complete"
    );

    Ok(Analysis {
        report,
        rejected: dataset.rejected().to_vec(),
    })
}
