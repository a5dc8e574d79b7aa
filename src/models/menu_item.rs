use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Day labels for `DailySales`, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A menu price held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "f64")]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.as_f64()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Units sold per weekday, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySales([u32; 7]);

impl DailySales {
    pub fn new(counts: [u32; 7]) -> Self {
        Self(counts)
    }

    pub fn counts(&self) -> &[u32; 7] {
        &self.0
    }

    /// Pairs of (weekday label, units sold).
    pub fn by_day(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        WEEKDAYS.iter().copied().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&n| u64::from(n)).sum()
    }
}

/// A validated menu item.
///
/// Only the row validator builds these, so every instance already satisfies
/// the field rules: non-empty trimmed name and category, positive price,
/// at least one rating in `[0, 5]`, and seven daily sales counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    name: String,
    price: Price,
    category: String,
    ratings: Vec<Decimal>,
    daily_sales: DailySales,
}

impl MenuItem {
    pub(crate) fn from_validated(
        name: String,
        price: Price,
        category: String,
        ratings: Vec<Decimal>,
        daily_sales: DailySales,
    ) -> Self {
        Self {
            name,
            price,
            category,
            ratings,
            daily_sales,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn ratings(&self) -> &[Decimal] {
        &self.ratings
    }

    pub fn daily_sales(&self) -> &DailySales {
        &self.daily_sales
    }

    /// Canonical key for duplicate detection and ordering (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
