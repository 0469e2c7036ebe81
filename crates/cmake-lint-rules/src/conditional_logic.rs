//! Rule checking conditional and block commands.
//!
//! # Detected Patterns
//!
//! - Closers and `else` carrying arguments: `endif(WIN32)`
//! - Conditions with no arguments: `if()`
//! - A quoted condition keyword, likely a quoting mistake: `if(A "AND" B)`
//! - Block structure errors: a closer without opener, a closer of the wrong
//!   kind, `else`/`elseif` outside `if`, an opener never closed

use cmake_lint_core::utils::{role_of, walk, BlockIssue, BlockRole};
use cmake_lint_core::{Command, Diagnostic, FileContext, Rule};

/// Rule name for conditional-logic.
pub const NAME: &str = "conditional-logic";

/// Category emitted by this rule.
pub const CATEGORY: &str = "readability/logic";

/// Keywords with special meaning inside a condition.
const CONDITION_KEYWORDS: &[&str] = &[
    "NOT",
    "AND",
    "OR",
    "COMMAND",
    "POLICY",
    "TARGET",
    "TEST",
    "DEFINED",
    "EXISTS",
    "IS_NEWER_THAN",
    "IS_DIRECTORY",
    "IS_SYMLINK",
    "IS_ABSOLUTE",
    "MATCHES",
    "LESS",
    "GREATER",
    "EQUAL",
    "LESS_EQUAL",
    "GREATER_EQUAL",
    "STRLESS",
    "STRGREATER",
    "STREQUAL",
    "STRLESS_EQUAL",
    "STRGREATER_EQUAL",
    "VERSION_LESS",
    "VERSION_GREATER",
    "VERSION_EQUAL",
    "VERSION_LESS_EQUAL",
    "VERSION_GREATER_EQUAL",
    "IN_LIST",
];

/// Flags malformed conditionals and broken block structure.
#[derive(Debug, Clone, Default)]
pub struct ConditionalLogic;

impl ConditionalLogic {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_condition(command: &Command) -> bool {
    ["if", "elseif", "while"].iter().any(|n| command.is(n))
}

fn check_command(ctx: &FileContext, command: &Command, out: &mut Vec<Diagnostic>) {
    let repeats_expression = matches!(role_of(&command.name), BlockRole::Close(_))
        || command.is("else");
    if repeats_expression && !command.args.is_empty() {
        out.push(ctx.diagnostic(
            command.line,
            CATEGORY,
            format!(
                "Expression repeated inside {}; better to use only {}()",
                command.name_lower(),
                command.name
            ),
        ));
        return;
    }

    if !is_condition(command) {
        return;
    }
    if command.args.is_empty() {
        out.push(ctx.diagnostic(
            command.line,
            CATEGORY,
            format!("Empty condition in {}()", command.name),
        ));
        return;
    }
    for arg in command.args.iter().filter(|a| a.quoted) {
        if CONDITION_KEYWORDS.contains(&arg.value()) {
            out.push(ctx.diagnostic(
                arg.line,
                CATEGORY,
                format!(
                    "Quoted keyword {} in {}(); did you mean {}?",
                    arg.raw,
                    command.name,
                    arg.value()
                ),
            ));
        }
    }
}

fn describe(line: usize, issue: &BlockIssue) -> String {
    match issue {
        BlockIssue::UnmatchedClose { name } => {
            format!("{name}() without a matching opening command")
        }
        BlockIssue::MismatchedClose {
            name,
            open,
            opened_at,
        } => format!(
            "{name}() does not close {}() opened on line {opened_at}; expected {}()",
            open.opener(),
            open.closer()
        ),
        BlockIssue::MiddleOutsideIf { name } => format!("{name}() outside of an if() block"),
        BlockIssue::Unclosed { kind } => format!(
            "{}() on line {line} is never closed; expected {}()",
            kind.opener(),
            kind.closer()
        ),
    }
}

impl Rule for ConditionalLogic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn categories(&self) -> &'static [&'static str] {
        &[CATEGORY]
    }

    fn description(&self) -> &'static str {
        "Conditional and block commands are well-formed"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for command in ctx.commands() {
            check_command(ctx, command, &mut diagnostics);
        }
        for (line, issue) in walk(ctx.commands()).issues {
            diagnostics.push(ctx.diagnostic(line, CATEGORY, describe(line, &issue)));
        }
        diagnostics.sort_by_key(|d| d.line);
        diagnostics
    }
}
