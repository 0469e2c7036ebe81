//! The built-in rule table.

use cmake_lint_core::RuleBox;

use crate::{
    BlockIndentation, CommandCase, ConditionalLogic, ExtraSpaces, FileName, FinalNewlineRule,
    FindPackage, LineLength, NoTabs, Syntax, TrailingWhitespace, WhitespaceMismatch,
};

/// Returns every built-in rule, in evaluation order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FileName::new()),
        Box::new(FinalNewlineRule::new()),
        Box::new(Syntax::new()),
        Box::new(LineLength::new()),
        Box::new(CommandCase::new()),
        Box::new(BlockIndentation::new()),
        Box::new(ExtraSpaces::new()),
        Box::new(WhitespaceMismatch::new()),
        Box::new(NoTabs::new()),
        Box::new(TrailingWhitespace::new()),
        Box::new(ConditionalLogic::new()),
        Box::new(FindPackage::new()),
    ]
}
