//! Helpers shared by the rule unit tests.

use cmake_lint_core::{
    Diagnostic, FileContext, LintConfiguration, ParsedFile, Rule, SourceFile,
};

/// Runs one rule over `code` with the default configuration.
pub fn check_code(rule: &dyn Rule, path: &str, code: &str) -> Vec<Diagnostic> {
    check_with(rule, path, code, &LintConfiguration::default())
}

/// Runs one rule over `code` with the given configuration.
pub fn check_with(
    rule: &dyn Rule,
    path: &str,
    code: &str,
    config: &LintConfiguration,
) -> Vec<Diagnostic> {
    let source = SourceFile::from_content(path, code);
    let parsed = ParsedFile::parse(&source);
    let ctx = FileContext::new(&source, &parsed, config, config.filters());
    rule.check(&ctx)
}

/// Line numbers of the diagnostics, in order.
pub fn lines(diagnostics: &[Diagnostic]) -> Vec<usize> {
    diagnostics.iter().map(|d| d.line).collect()
}
