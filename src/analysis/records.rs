use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::analysis::validation::validate_row;
use crate::error::{DatasetError, RowError};
use crate::models::{MenuItem, RawRow};

/// The validated menu items of one run, in canonical order, plus the rows
/// that failed validation.
#[derive(Debug, Clone)]
pub struct Dataset {
    items: Vec<MenuItem>,
    rejected: Vec<RowError>,
}

impl Dataset {
    /// Items sorted by lowercase name (then exact name).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Row errors in row order.
    pub fn rejected(&self) -> &[RowError] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Validate every row and assemble the dataset.
///
/// Row errors are collected rather than returned early. Duplicate names
/// (case-insensitive) among the valid rows and an empty result abort the run.
pub fn build_dataset(rows: &[RawRow]) -> Result<Dataset, DatasetError> {
    let mut valid: Vec<(usize, MenuItem)> = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for row in rows {
        match validate_row(row) {
            Ok(item) => valid.push((row.index, item)),
            Err(e) => {
                debug!(row = row.index, error = %e, "row rejected");
                rejected.push(e);
            }
        }
    }
    rejected.sort_by_key(RowError::row);
    if !rejected.is_empty() {
        warn!(count = rejected.len(), "rows failed validation");
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, item) in &valid {
        if let Some(&first_row) = seen.get(&item.key()) {
            return Err(DatasetError::DuplicateItem {
                name: item.name().to_string(),
                first_row: first_row.min(*index),
                second_row: first_row.max(*index),
            });
        }
        seen.insert(item.key(), *index);
    }

    if valid.is_empty() {
        return Err(DatasetError::Empty { rejected });
    }

    let mut items: Vec<MenuItem> = valid.into_iter().map(|(_, item)| item).collect();
    items.sort_by_cached_key(|item| (item.key(), item.name().to_string()));

    info!(
        items = items.len(),
        rejected = rejected.len(),
        "dataset built"
    );
    Ok(Dataset { items, rejected })
}
