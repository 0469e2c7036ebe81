//! Rule forbidding superfluous spaces inside command invocations.
//!
//! # Detected Patterns
//!
//! - Whitespace between a command name and its `(`: `project (foo)`
//! - More than one space between arguments on one line: `set(A  b)`
//!
//! Spacing inside quoted arguments and indentation of continuation lines are
//! not affected.

use cmake_lint_core::{Command, Diagnostic, FileContext, Rule};

/// Rule name for extra-spaces.
pub const NAME: &str = "extra-spaces";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/extra";

/// Flags extra whitespace around command names and between arguments.
#[derive(Debug, Clone, Default)]
pub struct ExtraSpaces;

impl ExtraSpaces {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Lines holding two consecutive arguments separated by more than one
/// character.
fn crowded_lines(command: &Command) -> Vec<usize> {
    let mut found = Vec::new();
    for pair in command.args.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.line != b.line || a.is_multiline() {
            continue;
        }
        let gap = b.offset.saturating_sub(a.offset + a.width());
        if gap > 1 && found.last() != Some(&b.line) {
            found.push(b.line);
        }
    }
    found
}

impl Rule for ExtraSpaces {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Forbids extra spaces before ( and between arguments"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for command in ctx.commands() {
            if !command.name_gap.is_empty() {
                diagnostics.push(ctx.diagnostic(
                    command.line,
                    CATEGORY,
                    format!("Extra spaces between '{}' and its ()", command.name),
                ));
            }
            for line in crowded_lines(command) {
                diagnostics.push(ctx.diagnostic(line, CATEGORY, "Extra spaces between arguments"));
            }
        }
        diagnostics
    }
}
