//! Rule checking file naming conventions.
//!
//! - `Find<Pkg>.cmake` modules use an upper-case package name
//! - Entry files are spelled exactly `CMakeLists.txt`
//!
//! Diagnostics address the whole file (line 0).

use cmake_lint_core::{Diagnostic, FileContext, Rule};

/// Rule name for file-name.
pub const NAME: &str = "file-name";

/// Category emitted by this rule.
pub const CATEGORY: &str = "convention/filename";

/// Package name of a `Find<Pkg>.cmake` module, if the file name is one.
#[must_use]
pub fn find_module_package(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix("Find")
        .and_then(|rest| rest.strip_suffix(".cmake"))
}

/// Flags misnamed Find modules and entry files.
#[derive(Debug, Clone, Default)]
pub struct FileName;

impl FileName {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FileName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Entry files and Find modules follow naming conventions"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let Some(file_name) = ctx.path().file_name().and_then(|n| n.to_str()) else {
            return Vec::new();
        };

        if let Some(package) = find_module_package(file_name) {
            if package.to_uppercase() != package {
                return vec![ctx.diagnostic(
                    0,
                    CATEGORY,
                    format!(
                        "Find modules should use uppercase names; consider using Find{}.cmake",
                        package.to_uppercase()
                    ),
                )];
            }
        } else if file_name.eq_ignore_ascii_case("CMakeLists.txt") && file_name != "CMakeLists.txt"
        {
            return vec![ctx.diagnostic(0, CATEGORY, "File should be called CMakeLists.txt")];
        }
        Vec::new()
    }
}
