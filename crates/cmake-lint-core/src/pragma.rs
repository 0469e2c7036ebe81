//! In-source filter pragmas.
//!
//! Supports directives like:
//! ```text
//! # lint_cmake: pragma(-whitespace/indent,+whitespace/tabs)
//! # lint_cmake: -linelength
//! ```
//!
//! Pragmas found anywhere in a file apply to that whole file only.

use crate::filter::{parse_filter_expression, FilterRule, Layer};

/// The directive marker.
const MARKER: &str = "# lint_cmake:";

/// A pragma line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PragmaIssue {
    /// Line of the malformed directive (1-based).
    pub line: usize,
    /// What was wrong with it.
    pub message: String,
}

/// Filter rules and issues collected from one file's pragmas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pragmas {
    /// Rules from every well-formed pragma, in line order.
    pub rules: Vec<FilterRule>,
    /// Malformed pragma lines.
    pub issues: Vec<PragmaIssue>,
}

impl Pragmas {
    /// Returns true if no pragma was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.issues.is_empty()
    }
}

/// Extracts the filter expression from a directive payload.
///
/// Accepts `pragma(<expr>)` and the bare `<expr>` form.
fn payload_expression(payload: &str) -> Option<&str> {
    let payload = payload.trim();
    if let Some(rest) = payload.strip_prefix("pragma") {
        let inner = rest.trim_start().strip_prefix('(')?;
        let close = inner.rfind(')')?;
        if !inner[close + 1..].trim().is_empty() {
            return None;
        }
        return Some(&inner[..close]);
    }
    if payload.starts_with('+') || payload.starts_with('-') {
        return Some(payload);
    }
    None
}

/// Parses one line, returning `None` when it holds no directive.
fn parse_line(line: &str, number: usize) -> Option<Result<Vec<FilterRule>, PragmaIssue>> {
    let start = line.find(MARKER)?;
    let payload = &line[start + MARKER.len()..];

    let issue = |detail: String| PragmaIssue {
        line: number,
        message: format!(
            "Malformed lint_cmake pragma ({detail}); expected '# lint_cmake: pragma(+category,-category)'"
        ),
    };

    let Some(expr) = payload_expression(payload) else {
        return Some(Err(issue(format!("unrecognized directive '{}'", payload.trim()))));
    };
    Some(parse_filter_expression(expr, Layer::Pragma).map_err(|e| issue(e.to_string())))
}

/// Scans every line of a file for pragmas.
#[must_use]
pub fn scan<S: AsRef<str>>(lines: &[S]) -> Pragmas {
    let mut pragmas = Pragmas::default();
    for (index, line) in lines.iter().enumerate() {
        match parse_line(line.as_ref(), index + 1) {
            None => {}
            Some(Ok(rules)) => {
                tracing::debug!("line {}: pragma adds {} filter rule(s)", index + 1, rules.len());
                pragmas.rules.extend(rules);
            }
            Some(Err(issue)) => {
                tracing::debug!("line {}: {}", issue.line, issue.message);
                pragmas.issues.push(issue);
            }
        }
    }
    pragmas
}
