use serde::Serialize;

use super::MenuItem;

/// Metrics derived from one menu item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemMetrics {
    /// Mean rating rounded to 2 decimals (ties to even).
    pub avg_rating: f64,

    /// Units sold across the week.
    pub total_sales: u64,

    /// Weighted combination of average rating and total sales.
    pub popularity_score: f64,
}

/// A menu item paired with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedItem {
    pub item: MenuItem,
    pub metrics: ItemMetrics,
}

impl AnalyzedItem {
    pub fn name(&self) -> &str {
        self.item.name()
    }
}
