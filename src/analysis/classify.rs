use serde::Serialize;
use tracing::debug;

use crate::analysis::config::{PopularityCutoff, Thresholds};
use crate::models::AnalyzedItem;

/// Thresholds with the dataset-dependent popularity cutoff resolved to a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedThresholds {
    pub policy: PopularityCutoff,
    pub popularity_cutoff: f64,
    pub popular_min_rating: f64,
    pub underrated_min_rating: f64,
    pub underrated_max_sales: u64,
    pub unprofitable_max_rating: f64,
    pub unprofitable_max_sales: u64,
}

/// Which categories an item falls into. Any combination is possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Segments {
    pub popular: bool,
    pub underrated: bool,
    pub unprofitable: bool,
}

/// Items with their segments, plus the thresholds that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub thresholds: ResolvedThresholds,
    pub items: Vec<(AnalyzedItem, Segments)>,
}

impl Classification {
    pub fn popular(&self) -> impl Iterator<Item = &AnalyzedItem> {
        self.items.iter().filter(|(_, s)| s.popular).map(|(i, _)| i)
    }

    pub fn underrated(&self) -> impl Iterator<Item = &AnalyzedItem> {
        self.items.iter().filter(|(_, s)| s.underrated).map(|(i, _)| i)
    }

    pub fn unprofitable(&self) -> impl Iterator<Item = &AnalyzedItem> {
        self.items
            .iter()
            .filter(|(_, s)| s.unprofitable)
            .map(|(i, _)| i)
    }
}

/// Mean of the scores. Scores are summed in ascending order so the result
/// does not depend on the order items arrive in.
pub fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.iter().sum::<f64>() / sorted.len() as f64
}

pub fn median(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Resolve the popularity cutoff against the dataset.
pub fn resolve_thresholds(items: &[AnalyzedItem], thresholds: &Thresholds) -> ResolvedThresholds {
    let scores: Vec<f64> = items.iter().map(|i| i.metrics.popularity_score).collect();
    let popularity_cutoff = match thresholds.popularity_cutoff {
        PopularityCutoff::DatasetMean => mean(&scores),
        PopularityCutoff::DatasetMedian => median(&scores),
        PopularityCutoff::Fixed { score } => score,
    };

    ResolvedThresholds {
        policy: thresholds.popularity_cutoff,
        popularity_cutoff,
        popular_min_rating: thresholds.popular_min_rating,
        underrated_min_rating: thresholds.underrated_min_rating,
        underrated_max_sales: thresholds.underrated_max_sales,
        unprofitable_max_rating: thresholds.unprofitable_max_rating,
        unprofitable_max_sales: thresholds.unprofitable_max_sales,
    }
}

/// Evaluate the three category predicates for one item.
pub fn segments_for(item: &AnalyzedItem, t: &ResolvedThresholds) -> Segments {
    let m = &item.metrics;
    Segments {
        popular: m.popularity_score >= t.popularity_cutoff && m.avg_rating >= t.popular_min_rating,
        underrated: m.avg_rating >= t.underrated_min_rating
            && m.total_sales < t.underrated_max_sales,
        unprofitable: m.avg_rating < t.unprofitable_max_rating
            && m.total_sales < t.unprofitable_max_sales,
    }
}

/// Classify every item against thresholds resolved from the same items.
pub fn classify(items: &[AnalyzedItem], thresholds: &Thresholds) -> Classification {
    let resolved = resolve_thresholds(items, thresholds);
    debug!(
        cutoff = resolved.popularity_cutoff,
        policy = ?resolved.policy,
        "popularity cutoff resolved"
    );

    let items: Vec<(AnalyzedItem, Segments)> = items
        .iter()
        .map(|item| (item.clone(), segments_for(item, &resolved)))
        .collect();

    Classification {
        thresholds: resolved,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailySales, ItemMetrics, MenuItem, Price};
    use rust_decimal::Decimal;

    fn analyzed(name: &str, avg_rating: f64, total_sales: u64, score: f64) -> AnalyzedItem {
        AnalyzedItem {
            item: MenuItem::from_validated(
                name.to_string(),
                Price::from_cents(500),
                "Main".to_string(),
                vec![Decimal::try_from(avg_rating).unwrap()],
                DailySales::new([0; 7]),
            ),
            metrics: ItemMetrics {
                avg_rating,
                total_sales,
                popularity_score: score,
            },
        }
    }

    #[test]
    fn test_mean_and_median() {
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-9);
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_popular_needs_score_and_quality() {
        let items = vec![
            analyzed("High", 4.5, 200, 138.0),
            analyzed("Crowd Pleaser", 3.0, 300, 192.0),
            analyzed("Low", 4.0, 10, 22.0),
        ];
        let result = classify(&items, &Thresholds::default());
        let popular: Vec<&str> = result.popular().map(|i| i.name()).collect();
        // mean = 117.33; "Crowd Pleaser" clears the score but not the rating floor.
        assert_eq!(popular, vec!["High"]);
    }

    #[test]
    fn test_fixed_cutoff() {
        let items = vec![analyzed("Only", 4.0, 10, 22.0)];
        let mut thresholds = Thresholds::default();
        thresholds.popularity_cutoff = PopularityCutoff::Fixed { score: 25.0 };
        let result = classify(&items, &thresholds);
        assert_eq!(result.thresholds.popularity_cutoff, 25.0);
        assert_eq!(result.popular().count(), 0);
    }

    #[test]
    fn test_item_can_be_in_two_segments() {
        // A single item is its own mean, so it is popular and also underrated.
        let items = vec![analyzed("Solo", 4.9, 20, 31.6)];
        let result = classify(&items, &Thresholds::default());
        let (_, segments) = &result.items[0];
        assert!(segments.popular);
        assert!(segments.underrated);
        assert!(!segments.unprofitable);
    }

    #[test]
    fn test_sales_ceilings_are_exclusive() {
        let t = resolve_thresholds(&[], &Thresholds::default());
        let at_ceiling = analyzed("Edge", 4.8, 50, 0.0);
        assert!(!segments_for(&at_ceiling, &t).underrated);
        let below = analyzed("Edge", 4.8, 49, 0.0);
        assert!(segments_for(&below, &t).underrated);
    }
}
