//! Context types for rule execution.

use std::path::Path;

use crate::config::LintConfiguration;
use crate::filter::FilterSet;
use crate::lines::{classify, LineKind, LogicalLine};
use crate::pragma::{scan, Pragmas};
use crate::source::SourceFile;
use crate::tokenizer::{tokenize, Command};
use crate::types::Diagnostic;

/// Everything derived from a file's raw lines before any rule runs.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    /// Logical line spans, a partition of the physical lines.
    pub spans: Vec<LogicalLine>,
    /// Commands in source order.
    pub commands: Vec<Command>,
    /// Pragmas collected from the whole file.
    pub pragmas: Pragmas,
}

impl ParsedFile {
    /// Classifies, tokenizes and pre-scans pragmas for one file.
    ///
    /// Command spans that do not start with `name(` are logged and left out
    /// of [`Self::commands`].
    #[must_use]
    pub fn parse(source: &SourceFile) -> Self {
        let lines = source.lines();
        let spans = classify(lines);
        let mut commands = Vec::new();

        for span in spans.iter().filter(|s| s.kind == LineKind::Command) {
            match tokenize(&lines[span.start - 1..span.end], span.start) {
                Ok(command) => commands.push(command),
                Err(e) => tracing::debug!("{}: {e}", source.path().display()),
            }
        }

        Self {
            spans,
            commands,
            pragmas: scan(lines),
        }
    }
}

/// Context provided to rules.
///
/// Holds the raw lines and the parsed command stream side by side, together
/// with the run configuration and the file-scoped filter set.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// The file being checked.
    pub source: &'a SourceFile,
    /// Its parsed form.
    pub parsed: &'a ParsedFile,
    /// Shared run configuration.
    pub config: &'a LintConfiguration,
    /// Filters for this file, pragmas included.
    pub filters: &'a FilterSet,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(
        source: &'a SourceFile,
        parsed: &'a ParsedFile,
        config: &'a LintConfiguration,
        filters: &'a FilterSet,
    ) -> Self {
        Self {
            source,
            parsed,
            config,
            filters,
        }
    }

    /// Path of the file.
    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.source.path()
    }

    /// Raw physical lines.
    #[must_use]
    pub fn lines(&self) -> &'a [String] {
        self.source.lines()
    }

    /// Physical lines paired with their 1-based numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &'a str)> {
        self.source
            .lines()
            .iter()
            .enumerate()
            .map(|(i, l)| (i + 1, l.as_str()))
    }

    /// Commands in source order.
    #[must_use]
    pub fn commands(&self) -> &'a [Command] {
        &self.parsed.commands
    }

    /// Whether a category is reported for this file.
    #[must_use]
    pub fn is_enabled(&self, category: &str) -> bool {
        self.filters.is_enabled(category)
    }

    /// Creates a diagnostic for this file.
    #[must_use]
    pub fn diagnostic(&self, line: usize, category: &str, message: impl Into<String>) -> Diagnostic {
        Diagnostic::new(self.source.path(), line, category, message)
    }
}
