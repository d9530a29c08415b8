//! Output-file writing.
//!
//! Writes use a write-to-temp-then-rename strategy in the destination
//! directory, so a failed write leaves the previous file, if any,
//! untouched. The parent directory is never created here; pointing the
//! outfile at a missing directory is an error.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{CliError, Result};

/// Write the rendered configuration bytes to `path`.
pub fn write_config(path: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| CliError::WriteConfig {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    let result = (|| {
        let mut temp = fs::File::create(&temp_path)?;
        temp.write_all(bytes)?;
        temp.sync_all()?;
        drop(temp);
        fs::rename(&temp_path, path)
    })();

    if let Err(source) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(source));
    }
    Ok(())
}
