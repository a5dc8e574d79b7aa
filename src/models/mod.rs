mod analyzed;
mod column;
mod menu_item;
mod raw_row;

pub use analyzed::{AnalyzedItem, ItemMetrics};
pub use column::Column;
pub use menu_item::{DailySales, MenuItem, Price, WEEKDAYS};
pub use raw_row::RawRow;
