use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::analysis::classify::{Classification, ResolvedThresholds};
use crate::analysis::config::ScoreWeights;
use crate::models::AnalyzedItem;

/// The ordered result lists of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuReport {
    pub weights: ScoreWeights,
    pub thresholds: ResolvedThresholds,
    /// Every item, highest popularity score first.
    pub ranked: Vec<AnalyzedItem>,
    /// Highest popularity score first.
    pub popular: Vec<AnalyzedItem>,
    /// Lowest total sales first.
    pub underrated: Vec<AnalyzedItem>,
    /// Lowest total sales first.
    pub unprofitable: Vec<AnalyzedItem>,
}

fn by_score_desc(a: &AnalyzedItem, b: &AnalyzedItem) -> Ordering {
    b.metrics
        .popularity_score
        .total_cmp(&a.metrics.popularity_score)
        .then_with(|| a.name().cmp(b.name()))
}

fn by_sales_asc(a: &AnalyzedItem, b: &AnalyzedItem) -> Ordering {
    a.metrics
        .total_sales
        .cmp(&b.metrics.total_sales)
        .then_with(|| a.name().cmp(b.name()))
}

fn ordered<'a>(
    items: impl Iterator<Item = &'a AnalyzedItem>,
    order: fn(&AnalyzedItem, &AnalyzedItem) -> Ordering,
) -> Vec<AnalyzedItem> {
    let mut seen = HashSet::new();
    let mut list: Vec<AnalyzedItem> = items
        .filter(|i| seen.insert(i.item.key()))
        .cloned()
        .collect();
    list.sort_by(order);
    list
}

/// Shape the classification into sorted, duplicate-free lists.
pub fn build_report(classification: &Classification, weights: ScoreWeights) -> MenuReport {
    MenuReport {
        weights,
        thresholds: classification.thresholds,
        ranked: ordered(classification.items.iter().map(|(i, _)| i), by_score_desc),
        popular: ordered(classification.popular(), by_score_desc),
        underrated: ordered(classification.underrated(), by_sales_asc),
        unprofitable: ordered(classification.unprofitable(), by_sales_asc),
    }
}
