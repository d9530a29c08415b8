//! Invocation settings with layered resolution.
//!
//! Settings are resolved once per invocation and passed to commands
//! explicitly; nothing reads configuration ambiently. Four layers, later
//! layers winning: built-in defaults, a TOML settings file (an explicit
//! `--config` path, or `~/.warren.toml` when present), environment
//! variables (bound on the flags themselves), and command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, LogFormat};
use crate::error::{CliError, Result};

/// Output path used when no layer overrides it.
pub const DEFAULT_OUTFILE: &str = ".renovaterc.json";

/// Settings dotfile looked up in the home directory.
pub const SETTINGS_DOTFILE: &str = ".warren.toml";

/// Fully resolved invocation settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the generated configuration is written
    pub outfile: PathBuf,
    /// Verbosity level (0 quiet logs, 1 debug, 2+ trace)
    pub verbose: u8,
    /// Log output format
    pub log_format: LogFormat,
    /// Suppress the stdout echo of the generated document
    pub quiet: bool,
}

/// The settings-file layer; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSettings {
    outfile: Option<PathBuf>,
    verbose: Option<u8>,
    log_format: Option<LogFormat>,
    quiet: Option<bool>,
}

impl Settings {
    /// Resolve settings for this invocation.
    ///
    /// The settings file supplies defaults for flags the user did not pass;
    /// environment variables are already folded into `cli` by the argument
    /// parser, so flag and environment precedence holds without extra work
    /// here.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match settings_file(cli)? {
            Some(path) => load_file(&path)?,
            None => FileSettings::default(),
        };

        Ok(Self {
            outfile: cli
                .outfile
                .clone()
                .or(file.outfile)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE)),
            verbose: if cli.verbose > 0 {
                cli.verbose
            } else {
                file.verbose.unwrap_or(0)
            },
            log_format: cli.log_format.or(file.log_format).unwrap_or_default(),
            quiet: cli.quiet || file.quiet.unwrap_or(false),
        })
    }
}

/// Determine which settings file applies, if any.
///
/// An explicit `--config` path must exist; the home dotfile is skipped
/// silently when absent.
fn settings_file(cli: &Cli) -> Result<Option<PathBuf>> {
    if let Some(path) = &cli.config {
        if !path.is_file() {
            return Err(CliError::Settings {
                path: path.clone(),
                message: "settings file not found".into(),
            });
        }
        return Ok(Some(path.clone()));
    }

    Ok(dirs::home_dir()
        .map(|home| home.join(SETTINGS_DOTFILE))
        .filter(|path| path.is_file()))
}

fn load_file(path: &Path) -> Result<FileSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| CliError::Settings {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
