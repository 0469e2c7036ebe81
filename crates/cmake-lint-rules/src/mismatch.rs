//! Rule checking whitespace consistency.
//!
//! # Detected Patterns
//!
//! - An indentation prefix mixing tabs and spaces
//! - Padding after `(` that differs from padding before `)`:
//!   `set( A B)`, `if(A )`
//!
//! Padding is only compared when both parentheses sit next to an argument
//! on their line.

use cmake_lint_core::utils::leading_whitespace;
use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for whitespace-mismatch.
pub const NAME: &str = "whitespace-mismatch";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/mismatch";

/// Flags mixed indentation and unbalanced `()` padding.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceMismatch;

impl WhitespaceMismatch {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for WhitespaceMismatch {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Consistent indentation characters and () padding"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = ctx
            .numbered_lines()
            .filter(|(_, line)| {
                let indent = leading_whitespace(line);
                indent.contains(' ') && indent.contains('\t') && indent.len() < line.len()
            })
            .map(|(n, _)| ctx.diagnostic(n, CATEGORY, "Mixed tabs and spaces in indentation"))
            .collect();

        for command in ctx.commands() {
            if let (Some(open), Some(close)) = (command.open_padding, command.close_padding) {
                if open != close {
                    diagnostics.push(ctx.diagnostic(
                        command.line,
                        CATEGORY,
                        "Mismatching spaces inside () after command",
                    ));
                }
            }
        }

        diagnostics.sort_by_key(|d| d.line);
        diagnostics
    }
}
