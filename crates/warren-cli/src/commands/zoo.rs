//! The `zoo` command: show all animal configurations.

use warren_presets::UnifiedSchema;

use crate::error::Result;

/// Print every selectable preset's rendered configuration, ordered by
/// animal name, each non-empty line prefixed with the animal it belongs to.
pub fn run_zoo(schema: &UnifiedSchema) -> Result<()> {
    for listing in schema.list_all()? {
        println!("[{}]", listing.name);
        for line in &listing.lines {
            if !line.is_empty() {
                println!("[{}] {}", listing.name, line);
            }
        }
        println!();
    }
    Ok(())
}
