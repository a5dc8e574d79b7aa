use std::fmt;

use serde::Serialize;

/// A required column of the menu CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Item,
    Price,
    Category,
    Ratings,
    SalesPerDay,
}

impl Column {
    /// Every required column, in header order.
    pub const REQUIRED: [Column; 5] = [
        Column::Item,
        Column::Price,
        Column::Category,
        Column::Ratings,
        Column::SalesPerDay,
    ];

    /// Header name as it appears in the CSV.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Item => "item",
            Column::Price => "price",
            Column::Category => "category",
            Column::Ratings => "ratings",
            Column::SalesPerDay => "sales_per_day",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
