//! Configuration types for cmake-lint.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::filter::{parse_filter_expression, path_matches, FilterError, FilterSet, Layer};
use crate::types::Severity;

const DEFAULT_INDENT_WIDTH: usize = 2;
const DEFAULT_LINE_LENGTH: usize = 80;
const DEFAULT_TAB_WIDTH: usize = 1;

/// Contents of a configuration file.
///
/// Every field is optional; values left unset fall back to the built-in
/// defaults or to command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Filter expression, e.g. `-whitespace/extra,+whitespace/tabs`.
    #[serde(default)]
    pub filter: Option<String>,

    /// Indentation width per block level.
    #[serde(default)]
    pub spaces: Option<usize>,

    /// Maximum line length.
    #[serde(default)]
    pub line_length: Option<usize>,

    /// Columns a tab counts for when measuring line length.
    #[serde(default)]
    pub tab_width: Option<usize>,

    /// Suppress the summary line when there is nothing to report.
    #[serde(default)]
    pub quiet: Option<bool>,

    /// Severity overrides keyed by category path or group.
    #[serde(default)]
    pub severity: BTreeMap<String, Severity>,
}

impl Config {
    /// Creates a new empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// `*.toml` files are read as TOML; anything else is read in the
    /// `key=value` rc format.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Self::parse(&content)
        } else {
            Self::parse_rc(&content)
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses the rc format: one `key=value` per line.
    ///
    /// Blank lines and `#` comments are skipped, unknown keys are ignored,
    /// and a repeated key keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-numeric `spaces`,
    /// `linelength` or `tab_width`, or a `quiet` value that is not a boolean.
    pub fn parse_rc(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!("ignoring rc line without '=': {line}");
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "filter" => config.filter = Some(value.to_string()),
                "spaces" => config.spaces = Some(parse_number("spaces", value)?),
                "linelength" => config.line_length = Some(parse_number("linelength", value)?),
                "tab_width" => config.tab_width = Some(parse_number("tab_width", value)?),
                "quiet" => config.quiet = Some(parse_bool("quiet", value)?),
                other => tracing::debug!("ignoring unknown rc key '{other}'"),
            }
        }
        Ok(config)
    }
}

fn parse_number(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Resolved settings for one run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfiguration {
    filters: FilterSet,
    indent_width: usize,
    line_length: usize,
    tab_width: usize,
    quiet: bool,
    severity_overrides: BTreeMap<String, Severity>,
}

impl Default for LintConfiguration {
    fn default() -> Self {
        Self {
            filters: FilterSet::defaults(),
            indent_width: DEFAULT_INDENT_WIDTH,
            line_length: DEFAULT_LINE_LENGTH,
            tab_width: DEFAULT_TAB_WIDTH,
            quiet: false,
            severity_overrides: BTreeMap::new(),
        }
    }
}

impl LintConfiguration {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> LintConfigurationBuilder {
        LintConfigurationBuilder::default()
    }

    /// Layered filters: defaults, config file, command line.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Spaces per block level.
    #[must_use]
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Maximum line length in columns.
    #[must_use]
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Columns a tab counts for.
    #[must_use]
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Whether the summary is suppressed for clean runs.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Severity override for a category; the longest matching key wins.
    #[must_use]
    pub fn severity_for(&self, category: &str) -> Option<Severity> {
        self.severity_overrides
            .iter()
            .filter(|(path, _)| path_matches(path, category))
            .max_by_key(|(path, _)| path.len())
            .map(|(_, severity)| *severity)
    }
}

/// Builder for [`LintConfiguration`].
///
/// Values set directly on the builder take precedence over the config file.
#[derive(Debug, Default)]
pub struct LintConfigurationBuilder {
    file: Option<Config>,
    cli_filter: Option<String>,
    indent_width: Option<usize>,
    line_length: Option<usize>,
    tab_width: Option<usize>,
    quiet: Option<bool>,
}

impl LintConfigurationBuilder {
    /// Uses values from a loaded configuration file.
    #[must_use]
    pub fn config_file(mut self, config: &Config) -> Self {
        self.file = Some(config.clone());
        self
    }

    /// Sets the command-line filter expression.
    #[must_use]
    pub fn cli_filter(mut self, expr: impl Into<String>) -> Self {
        self.cli_filter = Some(expr.into());
        self
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn line_length(mut self, length: usize) -> Self {
        self.line_length = Some(length);
        self
    }

    /// Sets the tab width used for line length.
    #[must_use]
    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = Some(width);
        self
    }

    /// Sets the quiet flag.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    /// Resolves every layer into a [`LintConfiguration`].
    ///
    /// # Errors
    ///
    /// Returns an error if a filter expression is malformed or a numeric
    /// setting is zero.
    pub fn build(self) -> Result<LintConfiguration, ConfigError> {
        let file = self.file.unwrap_or_default();

        let mut filters = FilterSet::defaults();
        if let Some(expr) = &file.filter {
            filters.push_layer(parse_filter_expression(expr, Layer::ConfigFile)?);
        }
        if let Some(expr) = &self.cli_filter {
            filters.push_layer(parse_filter_expression(expr, Layer::CommandLine)?);
        }

        let indent_width = positive(
            "spaces",
            self.indent_width.or(file.spaces).unwrap_or(DEFAULT_INDENT_WIDTH),
        )?;
        let line_length = positive(
            "linelength",
            self.line_length
                .or(file.line_length)
                .unwrap_or(DEFAULT_LINE_LENGTH),
        )?;
        let tab_width = positive(
            "tab_width",
            self.tab_width.or(file.tab_width).unwrap_or(DEFAULT_TAB_WIDTH),
        )?;

        tracing::debug!(
            rules = filters.rules().len(),
            indent_width,
            line_length,
            "resolved lint configuration"
        );

        Ok(LintConfiguration {
            filters,
            indent_width,
            line_length,
            tab_width,
            quiet: self.quiet.or(file.quiet).unwrap_or(false),
            severity_overrides: file.severity,
        })
    }
}

fn positive(key: &str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Malformed filter expression.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A setting has an unusable value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// Value as given.
        value: String,
    },
}
