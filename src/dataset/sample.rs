use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::Column;

/// Sample menu: one clear underrated dish (Garlic Bread) and one
/// unprofitable dish (Cheesecake) among steady sellers.
pub const SAMPLE_MENU: [[&str; 5]; 7] = [
    ["Chicken Parmigiana", "19.99", "Main", "4.5,4.7,5.0", "10,15,20,25,30,35,40"],
    ["Fish and Chips", "18.99", "Main", "4.8,4.9,4.7", "5,10,15,20,25,30,35"],
    ["Margherita Pizza", "15.99", "Main", "4.0,4.2,4.3", "50,60,70,80,90,100,110"],
    ["Caesar Salad", "9.99", "Starter", "4.5,4.6,4.8", "20,25,30,35,40,45,50"],
    ["Garlic Bread", "6.99", "Starter", "4.8,4.9,4.7", "10,5,1,15,3,5,10"],
    ["Tiramisu", "7.99", "Dessert", "4.7,4.8,4.9", "15,20,25,30,35,40,45"],
    ["Cheesecake", "6.99", "Dessert", "2.5,2.7,2.8", "1,2,3,4,5,6,7"],
];

/// Write the sample menu CSV, overwriting any existing file.
pub fn write_sample<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(Column::REQUIRED.map(Column::as_str))?;
    for row in SAMPLE_MENU {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), "wrote sample menu");
    Ok(())
}
