//! Subcommand implementations.

use anyhow::{Context, Result};
use cmake_lint_core::LintConfiguration;

use crate::{config_resolver, SettingsArgs};

pub mod check;
pub mod init;
pub mod list_categories;
pub mod output;

/// Layers the discovered configuration file and command-line settings.
///
/// # Errors
///
/// Fails if the configuration file cannot be loaded or a setting is invalid.
pub fn resolve_configuration(settings: &SettingsArgs) -> Result<LintConfiguration> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let source = config_resolver::resolve(&cwd, settings.config.as_deref());
    tracing::debug!("Configuration source: {source:?}");
    let file = source.load()?;

    let mut builder = LintConfiguration::builder().config_file(&file);
    if let Some(filter) = &settings.filter {
        builder = builder.cli_filter(filter.as_str());
    }
    if let Some(spaces) = settings.spaces {
        builder = builder.indent_width(spaces);
    }
    if let Some(length) = settings.linelength {
        builder = builder.line_length(length);
    }
    if settings.quiet {
        builder = builder.quiet(true);
    }
    builder.build().context("Invalid configuration")
}
