//! Rule checking indentation against block nesting.
//!
//! Each command is expected at `level * indent_width` spaces, where the level
//! counts the enclosing `if`/`foreach`/`while`/`function`/`macro`/`block`
//! scopes. `elseif`, `else` and closers sit at their opener's level.
//!
//! ```text
//! if(WIN32)
//!   foreach(src IN LISTS SOURCES)
//!     message(${src})
//!   endforeach()
//! else()
//!   message("other")
//! endif()
//! ```
//!
//! Only the first line of a command is checked. Indents containing tabs are
//! left to the tab and mismatch checks.

use cmake_lint_core::utils::walk;
use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for block-indentation.
pub const NAME: &str = "block-indentation";

/// Category emitted by this rule.
pub const CATEGORY: &str = "whitespace/indent";

/// Flags commands whose indentation does not match their nesting depth.
#[derive(Debug, Clone, Default)]
pub struct BlockIndentation;

impl BlockIndentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BlockIndentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Indentation follows block nesting"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let width = ctx.config.indent_width();
        let commands = ctx.commands();
        let levels = walk(commands).levels;

        commands
            .iter()
            .zip(levels)
            .filter(|(command, _)| !command.indent.contains('\t'))
            .filter_map(|(command, level)| {
                let expected = level * width;
                let found = command.indent.chars().count();
                (expected != found).then(|| {
                    ctx.diagnostic(
                        command.line,
                        CATEGORY,
                        format!("Weird indentation; expected {expected} spaces, found {found}"),
                    )
                })
            })
            .collect()
    }
}
