//! Rule forbidding tab characters.

use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for no-tabs.
pub const NAME: &str = "no-tabs";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/tabs";

/// Flags every line containing a tab.
#[derive(Debug, Clone, Default)]
pub struct NoTabs;

impl NoTabs {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoTabs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Forbids tab characters"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        ctx.numbered_lines()
            .filter(|(_, line)| line.contains('\t'))
            .map(|(n, _)| ctx.diagnostic(n, CATEGORY, "Tab found; please use spaces"))
            .collect()
    }
}
