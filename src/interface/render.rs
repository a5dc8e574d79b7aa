use tabled::{settings::Style, Table, Tabled};

use crate::analysis::MenuReport;
use crate::error::RowError;
use crate::models::AnalyzedItem;

#[derive(Debug, Clone, Tabled)]
pub struct MenuRow {
    #[tabled(rename = "Item")]
    pub item: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Avg Rating")]
    pub avg_rating: String,
    #[tabled(rename = "Sales/Day")]
    pub sales_per_day: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct PopularityRow {
    #[tabled(rename = "Item")]
    pub item: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Avg Rating")]
    pub avg_rating: String,
    #[tabled(rename = "Total Sales")]
    pub total_sales: u64,
    #[tabled(rename = "Popularity Score")]
    pub popularity_score: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct SegmentRow {
    #[tabled(rename = "Item")]
    pub item: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Avg Rating")]
    pub avg_rating: String,
    #[tabled(rename = "Total Sales")]
    pub total_sales: u64,
}

#[derive(Debug, Clone, Tabled)]
pub struct RejectionRow {
    #[tabled(rename = "Row")]
    pub row: usize,
    #[tabled(rename = "Column")]
    pub column: String,
    #[tabled(rename = "Problem")]
    pub problem: String,
}

impl From<&AnalyzedItem> for MenuRow {
    fn from(a: &AnalyzedItem) -> Self {
        Self {
            item: a.name().to_string(),
            price: a.item.price().to_string(),
            category: a.item.category().to_string(),
            avg_rating: format!("{:.2}", a.metrics.avg_rating),
            sales_per_day: a
                .item
                .daily_sales()
                .by_day()
                .map(|(day, n)| format!("{}:{}", day, n))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&AnalyzedItem> for PopularityRow {
    fn from(a: &AnalyzedItem) -> Self {
        Self {
            item: a.name().to_string(),
            category: a.item.category().to_string(),
            avg_rating: format!("{:.2}", a.metrics.avg_rating),
            total_sales: a.metrics.total_sales,
            popularity_score: format!("{:.2}", a.metrics.popularity_score),
        }
    }
}

impl From<&AnalyzedItem> for SegmentRow {
    fn from(a: &AnalyzedItem) -> Self {
        Self {
            item: a.name().to_string(),
            category: a.item.category().to_string(),
            avg_rating: format!("{:.2}", a.metrics.avg_rating),
            total_sales: a.metrics.total_sales,
        }
    }
}

impl From<&RowError> for RejectionRow {
    fn from(e: &RowError) -> Self {
        let column = match e {
            RowError::MissingColumn { columns, .. } => columns
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            other => other.column().map(|c| c.to_string()).unwrap_or_default(),
        };
        Self {
            row: e.row(),
            column,
            problem: e.to_string(),
        }
    }
}

/// Render rows as a table string, or `None` when there are no rows.
pub fn render_table<T, R>(items: &[T]) -> Option<String>
where
    R: Tabled + for<'a> From<&'a T>,
{
    if items.is_empty() {
        return None;
    }
    let rows: Vec<R> = items.iter().map(R::from).collect();
    Some(Table::new(rows).with(Style::psql()).to_string())
}

fn print_section<R>(title: &str, items: &[AnalyzedItem], empty_message: &str)
where
    R: Tabled + for<'a> From<&'a AnalyzedItem>,
{
    println!();
    println!("=== {} ===", title);
    match render_table::<AnalyzedItem, R>(items) {
        Some(table) => println!("{}", table),
        None => println!("{}", empty_message),
    }
}

/// Display the menu overview and the three analyses.
pub fn display_report(report: &MenuReport) {
    print_section::<MenuRow>("Menu", &report.ranked, "No menu items.");
    print_section::<PopularityRow>(
        "Analysis of Popular Items",
        &report.ranked,
        "No menu items.",
    );
    println!(
        "Popularity cutoff: {:.2} ({:?}), minimum rating {:.2}",
        report.thresholds.popularity_cutoff,
        report.thresholds.policy,
        report.thresholds.popular_min_rating
    );
    print_section::<PopularityRow>("Popular Items", &report.popular, "No popular items found.");
    print_section::<SegmentRow>(
        "Identification of Underrated Items",
        &report.underrated,
        "No underrated items found.",
    );
    print_section::<SegmentRow>(
        "Identification of Unprofitable Items",
        &report.unprofitable,
        "No unprofitable items found.",
    );
    println!();
}

/// Display rows that failed validation.
pub fn display_rejections(rejected: &[RowError]) {
    if let Some(table) = render_table::<RowError, RejectionRow>(rejected) {
        println!();
        println!("=== Rejected Rows ({}) ===", rejected.len());
        println!("{}", table);
    }
}
