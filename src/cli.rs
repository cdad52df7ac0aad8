mod options;

use clap::{Parser, Subcommand};
pub use options::{ColorMode, OutputFormat};
use std::path::PathBuf;

/// Parse and validate `--events` filter flags for an event tracing policy
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = "EVENT_FLAGS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config value, then text)
    #[arg(short = 'F', long, global = true)]
    pub format: Option<OutputFormat>,

    /// When to color output
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse event flags and print the resulting policy map
    Parse {
        /// Event selection or filter, may be repeated (see `help-events`)
        #[arg(short, long = "events", value_name = "EVENT_SPEC", allow_hyphen_values = true)]
        events: Vec<String>,
    },
    /// Validate event flags without printing the policy map
    Check {
        /// Event selection or filter, may be repeated (see `help-events`)
        #[arg(short, long = "events", value_name = "EVENT_SPEC", allow_hyphen_values = true)]
        events: Vec<String>,
    },
    /// Describe the --events flag grammar
    HelpEvents,
}

impl Cli {
    pub fn effective_format(&self, configured: OutputFormat) -> OutputFormat {
        self.format.unwrap_or(configured)
    }

    pub fn effective_color(&self, configured: ColorMode) -> ColorMode {
        self.color.unwrap_or(configured)
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
