//! The `renovate` command: generate a configuration from one preset.

use std::io::Write;

use warren_presets::{UnifiedSchema, render};

use crate::cli::BIN_NAME;
use crate::error::{CliError, Result};
use crate::output;
use crate::settings::Settings;

/// Resolve `preset`, render it, and write it to the configured output path.
///
/// Only user-selectable presets are exposed here. Shared base definitions
/// resolve fine in the library, but at this surface they are treated like
/// any other unknown command name.
pub fn run_renovate(schema: &UnifiedSchema, preset: &str, settings: &Settings) -> Result<()> {
    if !schema.is_selectable(preset) {
        return Err(CliError::unknown_command(
            preset,
            format!("{BIN_NAME} renovate"),
        ));
    }

    let document = schema.resolve(preset)?;
    let bytes = render(&document)?;
    output::write_config(&settings.outfile, &bytes)?;
    tracing::debug!(
        preset,
        outfile = %settings.outfile.display(),
        bytes = bytes.len(),
        "wrote configuration"
    );

    if !settings.quiet {
        println!(
            "Generated {} using {} preset",
            settings.outfile.display(),
            preset
        );
        std::io::stdout().write_all(&bytes)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LogFormat;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn settings(outfile: PathBuf) -> Settings {
        Settings {
            outfile,
            verbose: 0,
            log_format: LogFormat::Text,
            quiet: true,
        }
    }

    #[test]
    fn test_generates_selectable_preset() {
        let dir = TempDir::new().unwrap();
        let outfile = dir.path().join("owl.json");
        let schema = warren_presets::compile_and_unify().unwrap();

        run_renovate(&schema, "owl", &settings(outfile.clone())).unwrap();

        let content = std::fs::read_to_string(&outfile).unwrap();
        assert!(content.contains("config:best-practices"));
    }

    #[test]
    fn test_unknown_preset_is_an_unknown_command() {
        let dir = TempDir::new().unwrap();
        let outfile = dir.path().join("x.json");
        let schema = warren_presets::compile_and_unify().unwrap();

        let err = run_renovate(&schema, "giraffe", &settings(outfile.clone())).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unknown command "giraffe" for "warren renovate""#
        );
        assert!(!outfile.exists());
    }

    #[test]
    fn test_abstract_base_is_hidden() {
        let dir = TempDir::new().unwrap();
        let outfile = dir.path().join("x.json");
        let schema = warren_presets::compile_and_unify().unwrap();

        let err = run_renovate(&schema, "base", &settings(outfile.clone())).unwrap_err();
        assert!(matches!(err, CliError::UnknownCommand { ref name, .. } if name == "base"));
        assert!(!outfile.exists());
    }
}
