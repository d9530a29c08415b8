//! warren CLI
//!
//! Generates Renovate configuration files from named animal presets.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod settings;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    logging::init(&settings)?;

    match &cli.command {
        Commands::Renovate { preset } => {
            let schema = warren_presets::compile_and_unify()?;
            commands::run_renovate(&schema, preset, &settings)
        }
        Commands::Zoo => {
            let schema = warren_presets::compile_and_unify()?;
            commands::run_zoo(&schema)
        }
        Commands::Version => commands::run_version(),
    }
}
