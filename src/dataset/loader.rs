use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::{MenuError, Result};
use crate::models::{Column, RawRow};

const UTF8_BOM: char = '\u{feff}';

/// Header and data rows of a menu CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Required columns absent from a header, in header order.
pub fn missing_columns(headers: &[String]) -> Vec<Column> {
    Column::REQUIRED
        .into_iter()
        .filter(|c| !headers.iter().any(|h| h == c.as_str()))
        .collect()
}

/// Read CSV rows from any reader.
///
/// Short records are accepted; their absent cells surface later as
/// missing columns for that row. A leading UTF-8 BOM is dropped.
pub fn read_rows<R: Read>(reader: R) -> Result<CsvTable> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h };
            h.trim().to_string()
        })
        .collect();
    debug!(?headers, "read CSV header");

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        rows.push(RawRow::from_pairs(
            i + 1,
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), v.to_string())),
        ));
    }

    Ok(CsvTable { headers, rows })
}

/// Fail with `MenuFileNotFound` unless `path` names an existing file.
pub fn require_menu_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(MenuError::MenuFileNotFound(path.to_path_buf()))
    }
}

/// Read a menu CSV from disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CsvTable> {
    let path = path.as_ref();
    let table = read_rows(File::open(path)?)?;
    info!(path = %path.display(), rows = table.rows.len(), "loaded menu CSV");
    Ok(table)
}
