//! Rule checking command name casing.
//!
//! # Detected Patterns
//!
//! - `readability/mixedcase`: a name with both cases, e.g. `Add_Library`
//! - `readability/wonkycase`: an all-upper or all-lower name that disagrees
//!   with the file's dominant style
//!
//! The dominant style is the majority among single-case command names; on a
//! tie the first such command decides. A file without any single-case name
//! has no dominant style and nothing is reported.

use cmake_lint_core::utils::{dominant_style, CaseStyle};
use cmake_lint_core::{Diagnostic, FileContext, Rule};
use tracing::debug;

/// Rule name for command-case.
pub const NAME: &str = "command-case";

/// Category for names disagreeing with the file's style.
pub const WONKY: &str = "readability/wonkycase";

/// Category for names mixing cases.
pub const MIXED: &str = "readability/mixedcase";

/// Flags inconsistent command name casing.
#[derive(Debug, Clone, Default)]
pub struct CommandCase;

impl CommandCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CommandCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[WONKY, MIXED]
    }

    fn description(&self) -> &'static str {
        "Command names use one case consistently"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let commands = ctx.commands();
        let Some(dominant) = dominant_style(commands.iter().map(|c| c.name.as_str())) else {
            debug!("{}: no single-case command names", ctx.path().display());
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for command in commands {
            match CaseStyle::of(&command.name) {
                CaseStyle::Mixed => {
                    diagnostics.push(ctx.diagnostic(
                        command.line,
                        MIXED,
                        "Do not use mixed case commands",
                    ));
                }
                style @ (CaseStyle::Lower | CaseStyle::Upper) if style != dominant => {
                    diagnostics.push(ctx.diagnostic(
                        command.line,
                        WONKY,
                        format!(
                            "Do not mix upper and lower case commands; this file uses {}",
                            dominant.describe()
                        ),
                    ));
                }
                _ => {}
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{check_code, lines};

    #[test]
    fn test_minority_style_is_wonky() {
        let code = "project(foo)\nset(A 1)\nMY_FUNC(Arg1 Arg2)\nadd_library(x a.c)\n";
        let diagnostics = check_code(&CommandCase::new(), "CMakeLists.txt", code);
        assert_eq!(lines(&diagnostics), [3]);
        assert_eq!(diagnostics[0].category, WONKY);
        assert_eq!(
            diagnostics[0].message,
            "Do not mix upper and lower case commands; this file uses lower case"
        );
    }

    #[test]
    fn test_upper_case_file() {
        let code = "PROJECT(foo)\nSET(A 1)\nmessage(x)\n";
        let diagnostics = check_code(&CommandCase::new(), "CMakeLists.txt", code);
        assert_eq!(lines(&diagnostics), [3]);
    }

    #[test]
    fn test_mixed_case_names() {
        let code = "Project(foo)\nset(A 1)\n";
        let diagnostics = check_code(&CommandCase::new(), "CMakeLists.txt", code);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].category, MIXED);
        assert_eq!(diagnostics[0].message, "Do not use mixed case commands");
    }

    #[test]
    fn test_only_mixed_case_names_have_no_dominant_style() {
        let code = "Project(foo)\nAdd_Library(x a.c)\n";
        assert!(check_code(&CommandCase::new(), "CMakeLists.txt", code).is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_command() {
        let code = "SET(A 1)\nproject(foo)\n";
        let diagnostics = check_code(&CommandCase::new(), "CMakeLists.txt", code);
        assert_eq!(lines(&diagnostics), [2]);
    }

    #[test]
    fn test_consistent_file_is_clean() {
        let code = "cmake_minimum_required(VERSION 3.20)\nproject(foo)\n";
        assert!(check_code(&CommandCase::new(), "CMakeLists.txt", code).is_empty());
    }
}
