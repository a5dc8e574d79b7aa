use rust_decimal::{Decimal, RoundingStrategy};

use crate::analysis::config::ScoreWeights;
use crate::analysis::constants::AVG_RATING_DECIMALS;
use crate::analysis::records::Dataset;
use crate::models::{AnalyzedItem, ItemMetrics, MenuItem};

/// Round to `decimals` places, ties to even, in exact decimal arithmetic.
pub fn round_half_even(value: Decimal, decimals: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(decimals);
    rounded
}

/// Mean of the ratings, rounded to `AVG_RATING_DECIMALS`.
///
/// The mean and the tie are decided on the decimal values; only the rounded
/// result is turned into an `f64`. Validated items always carry at least one
/// rating.
pub fn average_rating(ratings: &[Decimal]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: Decimal = ratings.iter().sum();
    let mean = sum / Decimal::from(ratings.len() as u64);
    let rounded = round_half_even(mean, AVG_RATING_DECIMALS);
    // Exact integer over an exact power of ten: the nearest f64 to the decimal.
    rounded.mantissa() as f64 / 10_f64.powi(AVG_RATING_DECIMALS as i32)
}

/// Popularity score: avg_rating * rating_weight + total_sales * sales_weight.
pub fn popularity_score(avg_rating: f64, total_sales: u64, weights: &ScoreWeights) -> f64 {
    avg_rating * weights.rating_weight + total_sales as f64 * weights.sales_weight
}

/// Derive the metrics of one item.
pub fn compute_metrics(item: &MenuItem, weights: &ScoreWeights) -> ItemMetrics {
    let avg_rating = average_rating(item.ratings());
    let total_sales = item.daily_sales().total();
    ItemMetrics {
        avg_rating,
        total_sales,
        popularity_score: popularity_score(avg_rating, total_sales, weights),
    }
}

/// Pair every item of the dataset with its metrics, keeping canonical order.
pub fn enrich(dataset: &Dataset, weights: &ScoreWeights) -> Vec<AnalyzedItem> {
    dataset
        .items()
        .iter()
        .map(|item| AnalyzedItem {
            item: item.clone(),
            metrics: compute_metrics(item, weights),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(dec!(0.125), 2), dec!(0.12));
        assert_eq!(round_half_even(dec!(0.375), 2), dec!(0.38));
        assert_eq!(round_half_even(dec!(2.666666), 2), dec!(2.67));
        assert_eq!(round_half_even(dec!(1.225), 2), dec!(1.22));
        assert_eq!(round_half_even(dec!(4.495), 2), dec!(4.50));
        assert_eq!(round_half_even(dec!(3), 2).to_string(), "3.00");
    }

    #[test]
    fn test_average_rating() {
        assert!((average_rating(&[dec!(2.5), dec!(2.7), dec!(2.8)]) - 2.67).abs() < 1e-9);
        assert!((average_rating(&[dec!(4.8), dec!(4.9), dec!(4.7)]) - 4.80).abs() < 1e-9);
        assert_eq!(average_rating(&[dec!(3.0)]), 3.0);
    }

    #[test]
    fn test_average_rating_decimal_ties() {
        // 4.495 and 1.225 are exact ties in decimal but not in binary.
        assert_eq!(average_rating(&[dec!(4.02), dec!(4.97)]), 4.50);
        assert_eq!(average_rating(&[dec!(0.0), dec!(2.45)]), 1.22);
        assert_eq!(average_rating(&[dec!(2.5), dec!(2.55)]), 2.52);
        assert_eq!(average_rating(&[dec!(4.1), dec!(4.15)]), 4.12);
    }

    #[test]
    fn test_popularity_score_default_weights() {
        let weights = ScoreWeights::default();
        // 4.80 * 4.0 + 49 * 0.6
        assert!((popularity_score(4.80, 49, &weights) - 48.6).abs() < 1e-9);
    }

    #[test]
    fn test_score_increases_with_each_input() {
        let weights = ScoreWeights::default();
        let base = popularity_score(3.0, 20, &weights);
        assert!(popularity_score(3.5, 20, &weights) > base);
        assert!(popularity_score(3.0, 21, &weights) > base);
    }
}
