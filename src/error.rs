use std::path::PathBuf;

use thiserror::Error;

use crate::models::Column;

/// Why a single CSV row was rejected. Rows are 1-based data rows (header excluded).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("row {row}: missing column(s): {}", join_columns(.columns))]
    MissingColumn { row: usize, columns: Vec<Column> },

    #[error("row {row}: {column} value '{value}' is not a valid number")]
    MalformedNumber {
        row: usize,
        column: Column,
        value: String,
    },

    #[error("row {row}: price must have exactly 2 decimal places (got '{value}')")]
    Precision { row: usize, value: String },

    #[error("row {row}: sales_per_day must have exactly {expected} values, found {found}")]
    CountMismatch {
        row: usize,
        expected: usize,
        found: usize,
        value: String,
    },

    #[error("row {row}: {column} value '{value}' is out of range ({reason})")]
    Range {
        row: usize,
        column: Column,
        value: String,
        reason: &'static str,
    },

    #[error("row {row}: {column} must not be empty")]
    EmptyField { row: usize, column: Column },
}

impl RowError {
    /// Data-row index the error refers to.
    pub fn row(&self) -> usize {
        match self {
            RowError::MissingColumn { row, .. }
            | RowError::MalformedNumber { row, .. }
            | RowError::Precision { row, .. }
            | RowError::CountMismatch { row, .. }
            | RowError::Range { row, .. }
            | RowError::EmptyField { row, .. } => *row,
        }
    }

    /// Column the error refers to, if it concerns exactly one.
    pub fn column(&self) -> Option<Column> {
        match self {
            RowError::MissingColumn { columns, .. } if columns.len() == 1 => Some(columns[0]),
            RowError::MissingColumn { .. } => None,
            RowError::MalformedNumber { column, .. }
            | RowError::Range { column, .. }
            | RowError::EmptyField { column, .. } => Some(*column),
            RowError::Precision { .. } => Some(Column::Price),
            RowError::CountMismatch { .. } => Some(Column::SalesPerDay),
        }
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn rejected_count(rejected: &[RowError]) -> usize {
    rejected.len()
}

/// Dataset-level failures. Any of these aborts the analysis run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    /// Two valid rows share a name. Names are compared case-insensitively
    /// after trimming, so `Tiramisu` and `tiramisu` collide. `name` is the
    /// later row's spelling.
    #[error("duplicate menu item '{name}' in rows {first_row} and {second_row}")]
    DuplicateItem {
        name: String,
        first_row: usize,
        second_row: usize,
    },

    #[error("no valid menu items ({} row(s) rejected)", rejected_count(.rejected))]
    Empty { rejected: Vec<RowError> },
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Menu file not found: {}", .0.display())]
    MenuFileNotFound(PathBuf),

    #[error("Invalid CSV structure. Missing columns: {}", join_columns(.0))]
    MissingColumns(Vec<Column>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} row(s) failed validation")]
    RejectedRows(usize),
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message_lists_all() {
        let err = RowError::MissingColumn {
            row: 3,
            columns: vec![Column::Price, Column::Ratings],
        };
        assert_eq!(err.to_string(), "row 3: missing column(s): price, ratings");
        assert_eq!(err.row(), 3);
        assert_eq!(err.column(), None);
    }

    #[test]
    fn test_precision_message() {
        let err = RowError::Precision {
            row: 1,
            value: "9.5".to_string(),
        };
        assert!(err.to_string().contains("exactly 2 decimal places"));
        assert_eq!(err.column(), Some(Column::Price));
    }
}
