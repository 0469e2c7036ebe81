//! Core types for lint diagnostics and results.

use miette::{NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::SourceFile;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, reported but not counted.
    Info,
    /// Style violation that counts toward the error total.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single style violation.
///
/// Line `0` addresses the file as a whole (file name and package checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the file the diagnostic belongs to.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 for file-level diagnostics).
    pub line: usize,
    /// Category path, e.g. `whitespace/tabs`.
    pub category: String,
    /// Human-readable message.
    pub message: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new error-severity diagnostic.
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            category: category.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Returns a copy of this diagnostic with a different severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Builds a rich `miette` report for this diagnostic against its source.
    #[must_use]
    pub fn to_report(&self, source: &SourceFile) -> DiagnosticReport {
        let (offset, length) = source.span_of_line(self.line);
        DiagnosticReport {
            message: format!("{} [{}]", self.message, self.category),
            src: NamedSource::new(self.file.display().to_string(), source.text()),
            span: SourceSpan::from((offset, length)),
            label_message: self.category.clone(),
            help: (self.line == 0).then(|| "applies to the whole file".to_string()),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.file.display(),
            self.line,
            self.message,
            self.category
        )
    }
}

/// A diagnostic paired with its source text for `miette` rendering.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
    #[help]
    help: Option<String>,
}

/// Final status of a lint run, consumed by the CLI to pick an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// No error-severity diagnostics.
    Clean,
    /// At least one error-severity diagnostic.
    ViolationsFound,
    /// Invalid invocation or configuration; nothing was linted.
    UsageError,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::ViolationsFound => 1,
            Self::UsageError => 32,
        }
    }
}

/// Accumulated diagnostics for one invocation.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Report {
    /// All diagnostics, file by file, line-ordered within each file.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics that count as errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Tri-state outcome of this report.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.has_errors() {
            Outcome::ViolationsFound
        } else {
            Outcome::Clean
        }
    }

    /// Returns diagnostics of the given category (exact match).
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Counts diagnostics by severity as `(errors, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self.error_count();
        (errors, self.diagnostics.len() - errors)
    }

    /// Renders every diagnostic, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        use std::fmt::Write;
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(out, "{diagnostic}");
        }
        out
    }

    /// Appends another report after this one.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(line: usize, category: &str, severity: Severity) -> Diagnostic {
        Diagnostic::new("CMakeLists.txt", line, category, "Tab found; please use spaces")
            .with_severity(severity)
    }

    #[test]
    fn display_matches_classic_format() {
        let d = make(3, "whitespace/tabs", Severity::Error);
        insta::assert_snapshot!(d.to_string(), @"CMakeLists.txt:3: Tab found; please use spaces [whitespace/tabs]");
    }

    #[test]
    fn info_diagnostics_do_not_count() {
        let mut report = Report::new();
        report.diagnostics.push(make(1, "linelength", Severity::Info));
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.outcome(), Outcome::Clean);

        report.diagnostics.push(make(2, "whitespace/tabs", Severity::Error));
        assert_eq!(report.count_by_severity(), (1, 1));
        assert_eq!(report.outcome(), Outcome::ViolationsFound);
    }

    #[test]
    fn empty_report_is_clean() {
        let report = Report::new();
        assert!(!report.has_errors());
        assert_eq!(report.outcome(), Outcome::Clean);
        assert_eq!(report.outcome().exit_code(), 0);
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_eq!(Outcome::ViolationsFound.exit_code(), 1);
        assert_eq!(Outcome::UsageError.exit_code(), 32);
    }

    #[test]
    fn extend_preserves_order_and_counts() {
        let mut first = Report::new();
        first.files_checked = 1;
        first.diagnostics.push(make(5, "linelength", Severity::Error));
        let mut second = Report::new();
        second.files_checked = 1;
        second.diagnostics.push(make(1, "syntax", Severity::Error));

        first.extend(second);
        assert_eq!(first.files_checked, 2);
        assert_eq!(first.diagnostics[0].line, 5);
        assert_eq!(first.diagnostics[1].category, "syntax");
        assert_eq!(first.by_category("syntax").len(), 1);
    }

    #[test]
    fn render_emits_one_line_per_diagnostic() {
        let mut report = Report::new();
        report.diagnostics.push(make(1, "whitespace/tabs", Severity::Error));
        report.diagnostics.push(make(2, "whitespace/tabs", Severity::Error));
        insta::assert_snapshot!(report.render().trim_end(), @r"
        CMakeLists.txt:1: Tab found; please use spaces [whitespace/tabs]
        CMakeLists.txt:2: Tab found; please use spaces [whitespace/tabs]
        ");
    }
}
