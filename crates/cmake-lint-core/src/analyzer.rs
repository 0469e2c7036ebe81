//! Linter driver orchestrating rule execution.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::LintConfiguration;
use crate::context::{FileContext, ParsedFile};
use crate::rule::{Rule, RuleBox};
use crate::source::SourceFile;
use crate::types::{Diagnostic, Report};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    config: Option<LintConfiguration>,
    rules: Vec<RuleBox>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resolved configuration.
    #[must_use]
    pub fn config(mut self, config: LintConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            config: self.config.unwrap_or_default(),
            rules: self.rules,
        }
    }
}

/// Runs the rule catalog over source files.
///
/// Use [`Linter::builder()`] to construct an instance. A linter holds no
/// per-file state and may be shared across threads.
pub struct Linter {
    config: LintConfiguration,
    rules: Vec<RuleBox>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// The configuration shared by every file.
    #[must_use]
    pub fn config(&self) -> &LintConfiguration {
        &self.config
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints one file.
    ///
    /// Pragmas extend a copy of the configured filters for this file only.
    /// Diagnostics come back ordered by line; diagnostics on the same line
    /// keep rule order.
    #[must_use]
    pub fn lint_source(&self, source: &SourceFile) -> Report {
        debug!("Linting: {}", source.path().display());

        let parsed = ParsedFile::parse(source);
        let filters = self.config.filters().extended(&parsed.pragmas.rules);
        let ctx = FileContext::new(source, &parsed, &self.config, &filters);

        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            if !rule.categories().iter().any(|c| filters.is_enabled(c)) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            let found = rule.check(&ctx);
            diagnostics.extend(
                found
                    .into_iter()
                    .filter(|d| filters.is_enabled(&d.category))
                    .map(|d| self.apply_severity_override(d)),
            );
        }
        diagnostics.sort_by_key(|d| d.line);

        Report {
            diagnostics,
            files_checked: 1,
        }
    }

    /// Lints a batch of files in parallel.
    ///
    /// Per-file reports are merged in input order, so the result matches a
    /// sequential run.
    #[must_use]
    pub fn lint_sources(&self, sources: &[SourceFile]) -> Report {
        info!("Linting {} files", sources.len());

        let reports: Vec<Report> = sources
            .par_iter()
            .map(|source| self.lint_source(source))
            .collect();

        let mut report = Report::new();
        for file_report in reports {
            report.extend(file_report);
        }

        info!(
            "Lint complete: {} diagnostics in {} files",
            report.diagnostics.len(),
            report.files_checked
        );
        report
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, diagnostic: Diagnostic) -> Diagnostic {
        match self.config.severity_for(&diagnostic.category) {
            Some(severity) => diagnostic.with_severity(severity),
            None => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::Severity;

    struct EveryLine;

    impl Rule for EveryLine {
        fn name(&self) -> &'static str {
            "every-line"
        }
        fn categories(&self) -> &'static [&'static str] {
            &["whitespace/eol", "whitespace/tabs"]
        }
        fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
            ctx.numbered_lines()
                .flat_map(|(n, _)| {
                    [
                        ctx.diagnostic(n, "whitespace/tabs", "tabs"),
                        ctx.diagnostic(n, "whitespace/eol", "eol"),
                    ]
                })
                .collect()
        }
    }

    fn linter(filter: &str) -> Linter {
        let config = LintConfiguration::builder()
            .cli_filter(filter)
            .build()
            .unwrap();
        Linter::builder().config(config).rule(EveryLine).build()
    }

    #[test]
    fn test_builder() {
        let linter = Linter::builder().rule(EveryLine).build();
        assert_eq!(linter.rule_count(), 1);
        assert_eq!(linter.config().line_length(), 80);
    }

    #[test]
    fn disabled_categories_are_dropped() {
        let source = SourceFile::from_lines("a.cmake", ["x()", "y()"]);
        let report = linter("-whitespace/tabs").lint_source(&source);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report.diagnostics.iter().all(|d| d.category == "whitespace/eol"));
    }

    #[test]
    fn fully_disabled_rule_is_skipped() {
        let source = SourceFile::from_lines("a.cmake", ["x()"]);
        let report = linter("-whitespace").lint_source(&source);
        assert!(report.diagnostics.is_empty());
        assert_eq!(report.files_checked, 1);
    }

    #[test]
    fn pragma_applies_to_its_file_only() {
        let with_pragma =
            SourceFile::from_lines("a.cmake", ["# lint_cmake: pragma(-whitespace/eol)"]);
        let without = SourceFile::from_lines("b.cmake", ["x()"]);
        let report = linter("").lint_sources(&[with_pragma, without]);

        let categories: Vec<(&str, &str)> = report
            .diagnostics
            .iter()
            .map(|d| (d.file.to_str().unwrap(), d.category.as_str()))
            .collect();
        assert_eq!(
            categories,
            [
                ("a.cmake", "whitespace/tabs"),
                ("b.cmake", "whitespace/tabs"),
                ("b.cmake", "whitespace/eol"),
            ]
        );
        assert_eq!(report.files_checked, 2);
    }

    #[test]
    fn severity_overrides_apply_by_prefix() {
        let file = Config::parse("[severity]\nwhitespace = \"info\"\n").unwrap();
        let config = LintConfiguration::builder()
            .config_file(&file)
            .build()
            .unwrap();
        let linter = Linter::builder().config(config).rule(EveryLine).build();
        let report = linter.lint_source(&SourceFile::from_lines("a.cmake", ["x()"]));
        assert!(report
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Info));
        assert!(!report.has_errors());
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let sources: Vec<SourceFile> = (0..16)
            .map(|i| SourceFile::from_lines(format!("f{i}.cmake"), ["a()", "b()"]))
            .collect();
        let linter = linter("");
        let parallel = linter.lint_sources(&sources);
        let mut sequential = Report::new();
        for source in &sources {
            sequential.extend(linter.lint_source(source));
        }
        assert_eq!(parallel.render(), sequential.render());
    }
}
