//! Rule limiting physical line length.
//!
//! Length is counted in characters; a tab counts as the configured tab
//! width. Comment lines and continuation lines are measured like any other.

use cmake_lint_core::utils::display_width;
use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for line-length.
pub const NAME: &str = "line-length";

/// Category emitted by this rule.
pub const CATEGORY: &str = "linelength";

/// Flags lines longer than the configured limit.
#[derive(Debug, Clone, Default)]
pub struct LineLength;

impl LineLength {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Lines stay within the configured length"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let limit = ctx.config.line_length();
        let tab_width = ctx.config.tab_width();
        ctx.numbered_lines()
            .filter(|(_, line)| display_width(line, tab_width) > limit)
            .map(|(n, _)| {
                ctx.diagnostic(
                    n,
                    CATEGORY,
                    format!("Lines should be <= {limit} characters long"),
                )
            })
            .collect()
    }
}
