use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::constants::*;
use crate::error::{MenuError, Result};

/// Weights of the popularity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub rating_weight: f64,
    pub sales_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating_weight: RATING_WEIGHT,
            sales_weight: SALES_WEIGHT,
        }
    }
}

/// How the popularity cutoff is derived for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PopularityCutoff {
    /// Mean popularity score of the dataset.
    DatasetMean,
    /// Median popularity score of the dataset.
    DatasetMedian,
    /// A fixed score.
    Fixed { score: f64 },
}

impl Default for PopularityCutoff {
    fn default() -> Self {
        PopularityCutoff::DatasetMean
    }
}

/// Classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub popularity_cutoff: PopularityCutoff,
    pub popular_min_rating: f64,
    pub underrated_min_rating: f64,
    pub underrated_max_sales: u64,
    pub unprofitable_max_rating: f64,
    pub unprofitable_max_sales: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            popularity_cutoff: PopularityCutoff::default(),
            popular_min_rating: POPULAR_MIN_RATING,
            underrated_min_rating: UNDERRATED_MIN_RATING,
            underrated_max_sales: UNDERRATED_MAX_SALES,
            unprofitable_max_rating: UNPROFITABLE_MAX_RATING,
            unprofitable_max_sales: UNPROFITABLE_MAX_SALES,
        }
    }
}

/// Everything that parameterizes one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub weights: ScoreWeights,
    pub thresholds: Thresholds,
}

impl AnalysisConfig {
    /// Load the config file if one was given, else the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights and thresholds that would make the policy meaningless.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if !(w.rating_weight.is_finite() && w.rating_weight > 0.0) {
            return Err(MenuError::InvalidConfig(format!(
                "rating_weight must be positive, got {}",
                w.rating_weight
            )));
        }
        if !(w.sales_weight.is_finite() && w.sales_weight > 0.0) {
            return Err(MenuError::InvalidConfig(format!(
                "sales_weight must be positive, got {}",
                w.sales_weight
            )));
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("popular_min_rating", t.popular_min_rating),
            ("underrated_min_rating", t.underrated_min_rating),
            ("unprofitable_max_rating", t.unprofitable_max_rating),
        ] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(MenuError::InvalidConfig(format!(
                    "{} must be within [{}, {}], got {}",
                    name, RATING_MIN, RATING_MAX, value
                )));
            }
        }

        if let PopularityCutoff::Fixed { score } = t.popularity_cutoff {
            if !(score.is_finite() && score >= 0.0) {
                return Err(MenuError::InvalidConfig(format!(
                    "fixed popularity cutoff must be non-negative, got {}",
                    score
                )));
            }
        }

        Ok(())
    }
}
