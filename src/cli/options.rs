use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for parsed event flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable table
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}

/// When to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
