//! Diagnostic categories and filter resolution.
//!
//! Categories are `group/subcategory` paths. A filter expression is a
//! comma-separated list of `+path` / `-path` tokens; a path addresses the
//! category with that name and every category below it. Rules from all layers
//! are evaluated in order and the last matching rule wins.

use thiserror::Error;

/// A registered diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category path.
    pub name: &'static str,
    /// One-line description for listings.
    pub description: &'static str,
}

/// Every category the rule catalog can emit, in listing order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "convention/filename",
        description: "Entry files and Find modules follow naming conventions",
    },
    Category {
        name: "linelength",
        description: "Lines stay within the configured length",
    },
    Category {
        name: "package/consistency",
        description: "Find modules include and use FindPackageHandleStandardArgs",
    },
    Category {
        name: "package/stdargs",
        description: "Standard-args call names the module's package",
    },
    Category {
        name: "readability/logic",
        description: "Conditional and block commands are well-formed",
    },
    Category {
        name: "readability/mixedcase",
        description: "Command names are not written in mixed case",
    },
    Category {
        name: "readability/wonkycase",
        description: "Command name casing matches the rest of the file",
    },
    Category {
        name: "syntax",
        description: "Unterminated commands, quotes, and malformed pragmas",
    },
    Category {
        name: "whitespace/eol",
        description: "No trailing whitespace",
    },
    Category {
        name: "whitespace/extra",
        description: "No extra spaces before ( or between arguments",
    },
    Category {
        name: "whitespace/indent",
        description: "Indentation follows block nesting",
    },
    Category {
        name: "whitespace/mismatch",
        description: "Consistent indentation characters and () padding",
    },
    Category {
        name: "whitespace/newline",
        description: "Single trailing newline, Unix line endings",
    },
    Category {
        name: "whitespace/tabs",
        description: "No tab characters",
    },
];

/// Looks up a registered category by exact name.
#[must_use]
pub fn category(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Returns true if a filter path addresses the given category.
///
/// The empty path (a bare `+` or `-`) addresses every category.
#[must_use]
pub fn path_matches(path: &str, category: &str) -> bool {
    path.is_empty()
        || category == path
        || category
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Where a filter rule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Built-in defaults.
    Default,
    /// User configuration file.
    ConfigFile,
    /// `--filter` on the command line.
    CommandLine,
    /// In-source `lint_cmake` pragma.
    Pragma,
}

/// One `+path` or `-path` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    /// Category path, possibly a group prefix or empty.
    pub path: String,
    /// `true` for `+`, `false` for `-`.
    pub enable: bool,
    /// Layer the rule was read from.
    pub layer: Layer,
}

impl FilterRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new(path: impl Into<String>, enable: bool, layer: Layer) -> Self {
        Self {
            path: path.into(),
            enable,
            layer,
        }
    }

    /// Whether this rule addresses any registered category.
    #[must_use]
    pub fn is_known(&self) -> bool {
        CATEGORIES.iter().any(|c| path_matches(&self.path, c.name))
    }
}

impl std::fmt::Display for FilterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.enable { '+' } else { '-' };
        write!(f, "{sign}{}", self.path)
    }
}

/// Filter expression errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A token does not start with `+` or `-`.
    #[error("Filter should start with - or +: '{token}'")]
    MissingSign {
        /// The offending token.
        token: String,
    },
}

/// Parses a comma-separated filter expression.
///
/// Tokens are trimmed and empty tokens are skipped. Unknown category paths
/// are accepted; they simply never match.
///
/// # Errors
///
/// Returns [`FilterError::MissingSign`] for a token without a sign.
pub fn parse_filter_expression(expr: &str, layer: Layer) -> Result<Vec<FilterRule>, FilterError> {
    let mut rules = Vec::new();
    for token in expr.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (enable, path) = if let Some(path) = token.strip_prefix('+') {
            (true, path)
        } else if let Some(path) = token.strip_prefix('-') {
            (false, path)
        } else {
            return Err(FilterError::MissingSign {
                token: token.to_string(),
            });
        };
        let rule = FilterRule::new(path.trim(), enable, layer);
        if !rule.is_known() {
            tracing::debug!("filter '{rule}' matches no registered category");
        }
        rules.push(rule);
    }
    Ok(rules)
}

/// An ordered sequence of filter rules.
///
/// Layers are appended in precedence order; values are never mutated in
/// place once shared, a file-scoped extension is a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    rules: Vec<FilterRule>,
}

impl FilterSet {
    /// Built-in defaults: every category enabled.
    #[must_use]
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Builds a set from rules, in order.
    #[must_use]
    pub fn from_rules(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// Appends a layer of rules.
    pub fn push_layer(&mut self, rules: impl IntoIterator<Item = FilterRule>) {
        self.rules.extend(rules);
    }

    /// Returns a new set with `rules` appended after this one.
    #[must_use]
    pub fn extended(&self, rules: &[FilterRule]) -> Self {
        let mut set = self.clone();
        set.rules.extend_from_slice(rules);
        set
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Resolves whether diagnostics of `category` are reported.
    #[must_use]
    pub fn is_enabled(&self, category: &str) -> bool {
        self.rules
            .iter()
            .rev()
            .find(|r| path_matches(&r.path, category))
            .map_or(true, |r| r.enable)
    }

    /// Every registered category with its resolved state.
    #[must_use]
    pub fn listing(&self) -> Vec<(&'static Category, bool)> {
        CATEGORIES
            .iter()
            .map(|c| (c, self.is_enabled(c.name)))
            .collect()
    }
}
