//! The `version` command.

use crate::error::Result;

/// Print the version line.
pub fn run_version() -> Result<()> {
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
