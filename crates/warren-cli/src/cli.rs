//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Command name as it appears in user-facing messages.
pub const BIN_NAME: &str = "warren";

/// warren - Generate Renovate configurations from animal presets
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default is $HOME/.warren.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(
        short = 'o',
        long,
        global = true,
        env = "WARREN_OUTFILE",
        value_name = "PATH"
    )]
    pub outfile: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log format
    #[arg(long, global = true, env = "WARREN_LOG_FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Suppress the stdout echo of the generated document
    #[arg(short = 'q', long, global = true, env = "WARREN_QUIET")]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a Renovate configuration from a named preset
    ///
    /// The preset name is an animal, e.g. "owl" or "rat". Run
    /// `warren zoo` to inspect every available preset.
    Renovate {
        /// Preset name
        preset: String,
    },

    /// Show all animal configurations
    ///
    /// Prints every available Renovate configuration ordered by animal
    /// name, each line prefixed with the animal it belongs to.
    Zoo,

    /// Print version information
    Version,
}

/// Log output format selector
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Structured JSON output
    Json,
}
