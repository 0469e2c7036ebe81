//! # cmake-lint-rules
//!
//! Built-in style rules for cmake-lint.
//!
//! ## Available Rules
//!
//! | Name | Categories | Description |
//! |------|------------|-------------|
//! | `file-name` | `convention/filename` | `CMakeLists.txt` spelling, upper-case Find modules |
//! | `final-newline` | `whitespace/newline` | Single trailing newline, no carriage returns |
//! | `syntax` | `syntax` | Unterminated commands and quotes, malformed pragmas |
//! | `line-length` | `linelength` | Lines within the configured length |
//! | `command-case` | `readability/wonkycase`, `readability/mixedcase` | Consistent command casing |
//! | `block-indentation` | `whitespace/indent` | Indentation follows block nesting |
//! | `extra-spaces` | `whitespace/extra` | No space before `(` or between arguments |
//! | `whitespace-mismatch` | `whitespace/mismatch` | No mixed indentation, balanced `()` padding |
//! | `no-tabs` | `whitespace/tabs` | No tab characters |
//! | `trailing-whitespace` | `whitespace/eol` | No trailing whitespace |
//! | `conditional-logic` | `readability/logic` | Well-formed conditionals and blocks |
//! | `find-package` | `package/consistency`, `package/stdargs` | Find modules use the standard-args helper |
//!
//! ## Usage
//!
//! ```ignore
//! use cmake_lint_core::{Linter, SourceFile};
//! use cmake_lint_rules::all_rules;
//!
//! let linter = Linter::builder().rules(all_rules()).build();
//! let report = linter.lint_source(&SourceFile::from_content("CMakeLists.txt", &content));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod command_case;
mod conditional_logic;
mod extra_spaces;
mod file_name;
mod final_newline;
mod find_package;
mod indentation;
mod line_length;
mod mismatch;
mod syntax;
mod tabs;
mod trailing_whitespace;

#[cfg(test)]
mod test_util;

pub use catalog::all_rules;
pub use command_case::CommandCase;
pub use conditional_logic::ConditionalLogic;
pub use extra_spaces::ExtraSpaces;
pub use file_name::FileName;
pub use final_newline::FinalNewlineRule;
pub use find_package::FindPackage;
pub use indentation::BlockIndentation;
pub use line_length::LineLength;
pub use mismatch::WhitespaceMismatch;
pub use syntax::Syntax;
pub use tabs::NoTabs;
pub use trailing_whitespace::TrailingWhitespace;

/// Re-export core types for convenience.
pub use cmake_lint_core::{Diagnostic, Rule, Severity};
