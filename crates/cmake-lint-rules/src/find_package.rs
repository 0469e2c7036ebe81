//! Rule checking `Find<Pkg>.cmake` modules.
//!
//! A find module must `include(FindPackageHandleStandardArgs)` and then call
//! `find_package_handle_standard_args(<PKG> ...)` with the upper-cased
//! package name taken from the file name.
//!
//! # Good Patterns
//!
//! ```text
//! include(FindPackageHandleStandardArgs)
//! find_package_handle_standard_args(FOO DEFAULT_MSG FOO_LIBRARY)
//! ```

use cmake_lint_core::{Diagnostic, FileContext, Rule};
use tracing::debug;

use crate::file_name::find_module_package;

/// Rule name for find-package.
pub const NAME: &str = "find-package";

/// Category for missing or misordered companion commands.
pub const CONSISTENCY: &str = "package/consistency";

/// Category for a wrong package name passed to the standard-args call.
pub const STDARGS: &str = "package/stdargs";

const HELPER_MODULE: &str = "FindPackageHandleStandardArgs";
const HELPER_COMMAND: &str = "find_package_handle_standard_args";

/// Checks that Find modules use the standard-args helper correctly.
#[derive(Debug, Clone, Default)]
pub struct FindPackage;

impl FindPackage {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FindPackage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CONSISTENCY, STDARGS]
    }

    fn description(&self) -> &'static str {
        "Find modules include and use FindPackageHandleStandardArgs"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let Some(package) = ctx
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(find_module_package)
        else {
            return Vec::new();
        };
        let expected = package.to_uppercase();
        debug!("{}: checking find module for {expected}", ctx.path().display());

        let mut diagnostics = Vec::new();
        let mut included = false;
        let mut used = false;

        for command in ctx.commands() {
            let first = command.first_arg().map(|a| a.value());
            if command.is("include") && first == Some(HELPER_MODULE) {
                included = true;
            } else if command.is(HELPER_COMMAND) {
                if !included && !used {
                    diagnostics.push(ctx.diagnostic(
                        command.line,
                        CONSISTENCY,
                        format!("{HELPER_COMMAND} used before include({HELPER_MODULE})"),
                    ));
                }
                used = true;
                let var = first.unwrap_or_default();
                if var != expected {
                    diagnostics.push(ctx.diagnostic(
                        command.line,
                        STDARGS,
                        format!("Weird variable passed to std args, should be {expected} not {var}"),
                    ));
                }
            }
        }

        let mut missing = Vec::new();
        if !included {
            missing.push(ctx.diagnostic(
                0,
                CONSISTENCY,
                "Package should include FindPackageHandleStandardArgs",
            ));
        }
        if !used {
            missing.push(ctx.diagnostic(
                0,
                CONSISTENCY,
                "Package should use FIND_PACKAGE_HANDLE_STANDARD_ARGS",
            ));
        }
        missing.extend(diagnostics);
        missing
    }
}
