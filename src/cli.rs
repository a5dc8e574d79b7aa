use clap::{Parser, Subcommand};

/// Menu insights — flags popular, underrated, and unprofitable dishes from a menu CSV.
#[derive(Parser, Debug)]
#[command(name = "menu_insights")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV file.
    #[arg(short, long, default_value = "menu.csv", global = true)]
    pub file: String,

    /// Optional JSON file overriding score weights and thresholds.
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the menu and print the analysis tables.
    Analyze {
        /// Abort if any row fails validation.
        #[arg(long)]
        strict: bool,

        /// Also write the report as JSON to this path.
        #[arg(long)]
        json: Option<String>,

        /// Never prompt; use the file as given.
        #[arg(short, long)]
        yes: bool,
    },

    /// Write the sample menu CSV.
    Sample {
        /// Overwrite an existing file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Print the effective weights and thresholds as JSON.
    Config,
}

impl Default for Command {
    fn default() -> Self {
        Command::Analyze {
            strict: false,
            json: None,
            yes: false,
        }
    }
}
