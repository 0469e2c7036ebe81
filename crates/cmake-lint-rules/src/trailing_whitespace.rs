//! Rule forbidding whitespace at the end of a line.

use cmake_lint_core::utils::has_trailing_whitespace;
use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for trailing-whitespace.
pub const NAME: &str = "trailing-whitespace";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/eol";

/// Flags lines ending in a space or tab.
#[derive(Debug, Clone, Default)]
pub struct TrailingWhitespace;

impl TrailingWhitespace {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TrailingWhitespace {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Forbids trailing whitespace"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        ctx.numbered_lines()
            .filter(|(_, line)| has_trailing_whitespace(line))
            .map(|(n, _)| ctx.diagnostic(n, CATEGORY, "Line ends in whitespace"))
            .collect()
    }
}
