use std::path::Path;

use dialoguer::{Confirm, Select};

use crate::dataset::write_sample;
use crate::error::Result;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Decide which menu file to analyze.
///
/// If the file exists, the user can use it, regenerate it from the sample
/// menu (after confirming the overwrite), or exit. If it does not exist, the
/// user can generate the sample. Returns `false` when the user chose to stop.
pub fn resolve_menu_file(path: &Path) -> Result<bool> {
    let shown = path.display();

    loop {
        if !path.exists() {
            println!("The file '{}' does not exist.", shown);
            if prompt_yes_no("Would you like to generate a sample CSV?", true)? {
                write_sample(path)?;
                println!("Sample CSV created: {}", shown);
                return Ok(true);
            }
            println!("No CSV file available.");
            return Ok(false);
        }

        if prompt_yes_no(&format!("The file '{}' exists. Use it?", shown), true)? {
            return Ok(true);
        }

        let options = ["Generate a sample CSV", "Exit"];
        let choice = Select::new()
            .with_prompt("What would you like to do instead?")
            .items(&options)
            .default(0)
            .interact()?;

        if choice == 1 {
            println!("Program terminated by user.");
            return Ok(false);
        }

        if prompt_yes_no(&format!("This will overwrite '{}'. Proceed?", shown), false)? {
            write_sample(path)?;
            println!("Sample CSV created: {}", shown);
            return Ok(true);
        }
        println!("Overwrite canceled.");
    }
}
