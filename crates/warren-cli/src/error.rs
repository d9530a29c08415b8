//! Error types for warren-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the preset pipeline
    #[error(transparent)]
    Presets(#[from] warren_presets::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A name that is not exposed under the given command group
    #[error("unknown command {name:?} for {parent:?}")]
    UnknownCommand { name: String, parent: String },

    /// Failure writing the generated configuration file.
    ///
    /// The "error writing config file" prefix is part of the contract;
    /// tooling matches on it to detect this failure class.
    #[error("error writing config file {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable settings file
    #[error("invalid settings file {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Failure installing the logging subscriber
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}

impl CliError {
    /// A command-group lookup failure for `name` under `parent`.
    pub fn unknown_command(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownCommand {
            name: name.into(),
            parent: parent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message_shape() {
        let err = CliError::unknown_command("giraffe", "warren renovate");
        assert_eq!(
            err.to_string(),
            r#"unknown command "giraffe" for "warren renovate""#
        );
    }

    #[test]
    fn test_write_config_message_prefix() {
        let err = CliError::WriteConfig {
            path: PathBuf::from("/nowhere/.renovaterc.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("error writing config file"));
    }
}
