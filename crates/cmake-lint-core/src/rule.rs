//! Rule trait for defining lint checks.

use crate::context::FileContext;
use crate::types::Diagnostic;

/// A per-file style check.
///
/// Rules are pure: they read the [`FileContext`] and return diagnostics. The
/// linter skips a rule when every category it declares is disabled for the
/// file, and drops any diagnostic whose category is disabled.
///
/// # Example
///
/// ```ignore
/// use cmake_lint_core::{Diagnostic, FileContext, Rule};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn categories(&self) -> &'static [&'static str] { &["whitespace/tabs"] }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
///         ctx.numbered_lines()
///             .filter(|(_, line)| line.contains('\t'))
///             .map(|(n, _)| ctx.diagnostic(n, "whitespace/tabs", "Tab found; please use spaces"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "line-length").
    fn name(&self) -> &'static str;

    /// Categories this rule may emit.
    fn categories(&self) -> &'static [&'static str];

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a single file and returns any diagnostics found.
    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn categories(&self) -> &'static [&'static str] {
            &["syntax"]
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
            vec![ctx.diagnostic(1, "syntax", "Test diagnostic")]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule: RuleBox = Box::new(TestRule);
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.categories(), ["syntax"]);
        assert_eq!(rule.description(), "A test rule");
    }
}
