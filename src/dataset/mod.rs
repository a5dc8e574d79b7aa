mod loader;
mod sample;

pub use loader::{load_csv, missing_columns, read_rows, require_menu_file, CsvTable};
pub use sample::{write_sample, SAMPLE_MENU};
