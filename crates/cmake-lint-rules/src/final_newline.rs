//! Rule checking line terminators.
//!
//! A file must end with exactly one `\n` and must not use `\r`.

use cmake_lint_core::{Diagnostic, FileContext, FinalNewline, Rule};

/// Rule name for final-newline.
pub const NAME: &str = "final-newline";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/newline";

/// Flags a missing or repeated final newline and carriage returns.
#[derive(Debug, Clone, Default)]
pub struct FinalNewlineRule;

impl FinalNewlineRule {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FinalNewlineRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Single trailing newline, Unix line endings"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if let Some(line) = ctx.source.first_carriage_return() {
            diagnostics.push(ctx.diagnostic(
                line,
                CATEGORY,
                "Unexpected carriage return found; better to use only \\n",
            ));
        }

        let last = ctx.source.len();
        match ctx.source.final_newline() {
            FinalNewline::Empty | FinalNewline::Single => {}
            FinalNewline::Missing => {
                diagnostics.push(ctx.diagnostic(
                    last,
                    CATEGORY,
                    "Could not find a newline character at the end of the file",
                ));
            }
            FinalNewline::Extra(blank) => {
                diagnostics.push(ctx.diagnostic(
                    last + 1 - blank,
                    CATEGORY,
                    "File should end with a single newline; found extra blank lines",
                ));
            }
        }

        diagnostics
    }
}
