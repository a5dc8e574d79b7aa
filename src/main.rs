use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use menu_insights_rs::analysis::{analyze, AnalysisConfig};
use menu_insights_rs::cli::{Cli, Command};
use menu_insights_rs::dataset::{load_csv, missing_columns, require_menu_file, write_sample};
use menu_insights_rs::error::{DatasetError, MenuError, Result};
use menu_insights_rs::interface::{
    display_rejections, display_report, prompt_yes_no, resolve_menu_file,
};
use menu_insights_rs::models::Column;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze { strict, json, yes } => {
            let config = AnalysisConfig::load_or_default(cli.config.as_deref())?;
            cmd_analyze(&cli.file, &config, strict, json.as_deref(), yes)
        }
        Command::Sample { force } => cmd_sample(&cli.file, force),
        Command::Config => {
            let config = AnalysisConfig::load_or_default(cli.config.as_deref())?;
            cmd_config(&config)
        }
    }
}

/// Validate the menu CSV and print the analysis.
fn cmd_analyze(
    file_path: &str,
    config: &AnalysisConfig,
    strict: bool,
    json_path: Option<&str>,
    no_prompt: bool,
) -> Result<()> {
    let path = Path::new(file_path);

    if no_prompt {
        if let Err(e) = require_menu_file(path) {
            eprintln!("Run the 'sample' command to create one.");
            return Err(e);
        }
    } else if !resolve_menu_file(path)? {
        println!("Program terminated: CSV file required.");
        return Ok(());
    }

    let table = load_csv(path)?;

    let missing = missing_columns(&table.headers);
    if !missing.is_empty() {
        let required: Vec<&str> = Column::REQUIRED.iter().map(|c| c.as_str()).collect();
        eprintln!("Required columns: {}", required.join(", "));
        return Err(MenuError::MissingColumns(missing));
    }

    let analysis = match analyze(&table.rows, config) {
        Ok(analysis) => analysis,
        Err(e) => {
            if let DatasetError::Empty { rejected } = &e {
                display_rejections(rejected);
            }
            return Err(e.into());
        }
    };

    display_rejections(&analysis.rejected);
    if strict && !analysis.rejected.is_empty() {
        return Err(MenuError::RejectedRows(analysis.rejected.len()));
    }

    display_report(&analysis.report);

    if let Some(json_path) = json_path {
        let json = serde_json::to_string_pretty(&analysis.report)?;
        fs::write(json_path, json)?;
        println!("Report written to {}", json_path);
    }

    Ok(())
}

/// Write the sample menu CSV.
fn cmd_sample(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("This will overwrite '{}'. Proceed?", file_path),
            false,
        )?;
        if !overwrite {
            println!("Overwrite canceled.");
            return Ok(());
        }
    }

    write_sample(path)?;
    println!("Sample CSV created: {}", file_path);
    Ok(())
}

/// Print the effective configuration.
fn cmd_config(config: &AnalysisConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
