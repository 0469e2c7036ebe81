//! List categories command implementation.

use anyhow::Result;
use cmake_lint_core::FilterSet;

use crate::SettingsArgs;

/// Runs the list-categories command.
///
/// # Errors
///
/// Fails if the configuration cannot be resolved.
pub fn run(settings: &SettingsArgs) -> Result<()> {
    let config = super::resolve_configuration(settings)?;
    print!("{}", render(config.filters()));

    println!("\nUse --filter to change which categories are reported, e.g.:");
    println!("  cmake-lint check --filter=-whitespace,+whitespace/tabs .");
    Ok(())
}

fn render(filters: &FilterSet) -> String {
    use std::fmt::Write;
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:<24} Description", "Enabled", "Category");
    let _ = writeln!(out, "{}", "-".repeat(80));
    for (category, enabled) in filters.listing() {
        let mark = if enabled { "+" } else { "-" };
        let _ = writeln!(
            out,
            "{:<8} {:<24} {}",
            mark, category.name, category.description
        );
    }
    out
}
