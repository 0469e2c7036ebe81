//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# cmake-lint configuration

# Filter expression: comma-separated +category / -category tokens.
# A group name such as "whitespace" covers every category below it.
# Run `cmake-lint list-categories` to see them all.
# filter = "-whitespace/extra,+whitespace/tabs"

# Indentation width per block level
spaces = 2

# Maximum line length
line_length = 80

# Columns a tab counts for when measuring line length
# tab_width = 1

# Suppress "Total Errors: 0"
quiet = false

# Per-category severity; "info" diagnostics are shown but not counted.
[severity]
# linelength = "info"
"#;

/// Runs the init command.
///
/// # Errors
///
/// Fails if the file exists and `force` is not set, or it cannot be written.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("cmake-lint.toml"), force)?;

    println!("Created cmake-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit cmake-lint.toml to choose categories");
    println!("  2. Run: cmake-lint check .");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
