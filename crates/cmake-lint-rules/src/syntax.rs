//! Rule reporting syntax anomalies.
//!
//! Unterminated commands are collapsed to their first line by the line
//! classifier, so each produces exactly one diagnostic and the rest of the
//! file is still checked. Malformed `lint_cmake` pragmas are reported here
//! as well.

use cmake_lint_core::lines::Unterminated;
use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for syntax.
pub const NAME: &str = "syntax";

/// Category emitted by this rule.
pub const CATEGORY: &str = "syntax";

/// Reports unterminated commands and malformed pragmas.
#[derive(Debug, Clone, Default)]
pub struct Syntax;

impl Syntax {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Syntax {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Unterminated commands, quotes, and malformed pragmas"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = ctx
            .parsed
            .spans
            .iter()
            .filter_map(|span| {
                let message = match span.unterminated? {
                    Unterminated::Paren => "Unable to find the end of this command",
                    Unterminated::Quote => "Unterminated quoted argument",
                };
                Some(ctx.diagnostic(span.start, CATEGORY, message))
            })
            .collect();

        diagnostics.extend(
            ctx.parsed
                .pragmas
                .issues
                .iter()
                .map(|issue| ctx.diagnostic(issue.line, CATEGORY, issue.message.clone())),
        );

        diagnostics.sort_by_key(|d| d.line);
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_code, lines};

    #[test]
    fn test_unbalanced_paren() {
        let diagnostics = check_code(&Syntax::new(), "CMakeLists.txt", "project(foo)\nset(A\n  b\n");
        assert_eq!(lines(&diagnostics), [2]);
        assert_eq!(diagnostics[0].message, "Unable to find the end of this command");
    }

    #[test]
    fn test_unterminated_quote_reported_once() {
        let code = "set(FOO \"bar)\nmessage(STATUS \"x\")\nset(B 2)\n";
        let diagnostics = check_code(&Syntax::new(), "CMakeLists.txt", code);
        assert_eq!(lines(&diagnostics), [1]);
        assert_eq!(diagnostics[0].message, "Unterminated quoted argument");
    }

    #[test]
    fn test_malformed_pragma() {
        let code = "# lint_cmake: pragma(linelength)\nproject(foo)\n";
        let diagnostics = check_code(&Syntax::new(), "CMakeLists.txt", code);
        assert_eq!(lines(&diagnostics), [1]);
        assert!(diagnostics[0].message.starts_with("Malformed lint_cmake pragma"));
    }

    #[test]
    fn test_clean_file() {
        let code = "project(foo)\nmessage(\"(\" # )\n)\n";
        assert!(check_code(&Syntax::new(), "CMakeLists.txt", code).is_empty());
    }
}
