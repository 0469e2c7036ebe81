//! Control-flow block structure.
//!
//! Tracks `if`/`foreach`/`while`/`function`/`macro`/`block` nesting over a
//! command stream. Both the indentation check and the logic check walk the
//! same structure.

use crate::tokenizer::Command;

/// Kind of a control-flow block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `if` ... `endif`
    If,
    /// `foreach` ... `endforeach`
    Foreach,
    /// `while` ... `endwhile`
    While,
    /// `function` ... `endfunction`
    Function,
    /// `macro` ... `endmacro`
    Macro,
    /// `block` ... `endblock`
    Block,
}

impl BlockKind {
    /// Opening command name.
    #[must_use]
    pub fn opener(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Foreach => "foreach",
            Self::While => "while",
            Self::Function => "function",
            Self::Macro => "macro",
            Self::Block => "block",
        }
    }

    /// Closing command name.
    #[must_use]
    pub fn closer(self) -> &'static str {
        match self {
            Self::If => "endif",
            Self::Foreach => "endforeach",
            Self::While => "endwhile",
            Self::Function => "endfunction",
            Self::Macro => "endmacro",
            Self::Block => "endblock",
        }
    }
}

/// Role a command plays in block structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    /// Opens a block.
    Open(BlockKind),
    /// `elseif` / `else` inside an `if`.
    Middle,
    /// Closes a block.
    Close(BlockKind),
    /// Any other command.
    Plain,
}

/// Determines the block role of a command name (case-insensitive).
#[must_use]
pub fn role_of(name: &str) -> BlockRole {
    const KINDS: [BlockKind; 6] = [
        BlockKind::If,
        BlockKind::Foreach,
        BlockKind::While,
        BlockKind::Function,
        BlockKind::Macro,
        BlockKind::Block,
    ];
    let lower = name.to_ascii_lowercase();
    if lower == "elseif" || lower == "else" {
        return BlockRole::Middle;
    }
    for kind in KINDS {
        if lower == kind.opener() {
            return BlockRole::Open(kind);
        }
        if lower == kind.closer() {
            return BlockRole::Close(kind);
        }
    }
    BlockRole::Plain
}

/// A structural problem found while walking blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockIssue {
    /// A closer with no open block.
    UnmatchedClose {
        /// Closing command as written.
        name: String,
    },
    /// A closer for a different kind than the innermost open block.
    MismatchedClose {
        /// Closing command as written.
        name: String,
        /// Innermost open block.
        open: BlockKind,
        /// Line the open block started on.
        opened_at: usize,
    },
    /// `elseif`/`else` outside an `if` block.
    MiddleOutsideIf {
        /// Command as written.
        name: String,
    },
    /// A block still open at end of file.
    Unclosed {
        /// Kind of the block.
        kind: BlockKind,
    },
}

/// Result of walking a command stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockWalk {
    /// Nesting level each command should sit at, parallel to the input.
    pub levels: Vec<usize>,
    /// Structural issues with the line they were found on.
    pub issues: Vec<(usize, BlockIssue)>,
}

/// Walks commands in order, computing nesting levels and structure issues.
///
/// Closers and `elseif`/`else` sit at the level of their opener. A
/// mismatched closer still pops the innermost block so later commands are
/// not all reported.
#[must_use]
pub fn walk(commands: &[Command]) -> BlockWalk {
    let mut stack: Vec<(BlockKind, usize)> = Vec::new();
    let mut result = BlockWalk::default();

    for cmd in commands {
        let level = match role_of(&cmd.name) {
            BlockRole::Plain => stack.len(),
            BlockRole::Open(kind) => {
                let level = stack.len();
                stack.push((kind, cmd.line));
                level
            }
            BlockRole::Middle => match stack.last() {
                Some((BlockKind::If, _)) => stack.len() - 1,
                _ => {
                    result.issues.push((
                        cmd.line,
                        BlockIssue::MiddleOutsideIf {
                            name: cmd.name.clone(),
                        },
                    ));
                    stack.len()
                }
            },
            BlockRole::Close(kind) => match stack.pop() {
                None => {
                    result.issues.push((
                        cmd.line,
                        BlockIssue::UnmatchedClose {
                            name: cmd.name.clone(),
                        },
                    ));
                    0
                }
                Some((open, opened_at)) => {
                    if open != kind {
                        result.issues.push((
                            cmd.line,
                            BlockIssue::MismatchedClose {
                                name: cmd.name.clone(),
                                open,
                                opened_at,
                            },
                        ));
                    }
                    stack.len()
                }
            },
        };
        result.levels.push(level);
    }

    for (kind, line) in stack {
        result.issues.push((line, BlockIssue::Unclosed { kind }));
    }
    result.issues.sort_by_key(|(line, _)| *line);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn commands(lines: &[&str]) -> Vec<Command> {
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| tokenize(&[*l], i + 1).unwrap())
            .collect()
    }

    #[test]
    fn roles_are_case_insensitive() {
        assert_eq!(role_of("IF"), BlockRole::Open(BlockKind::If));
        assert_eq!(role_of("EndForEach"), BlockRole::Close(BlockKind::Foreach));
        assert_eq!(role_of("elseif"), BlockRole::Middle);
        assert_eq!(role_of("set"), BlockRole::Plain);
    }

    #[test]
    fn levels_follow_nesting() {
        let cmds = commands(&[
            "if(A)",
            "foreach(x IN LISTS L)",
            "message(x)",
            "endforeach()",
            "elseif(B)",
            "set(C 1)",
            "else()",
            "endif()",
        ]);
        let walk = walk(&cmds);
        assert_eq!(walk.levels, vec![0, 1, 2, 1, 0, 1, 0, 0]);
        assert!(walk.issues.is_empty());
    }

    #[test]
    fn reports_structure_problems() {
        let cmds = commands(&["endif()", "else()", "while(X)", "endforeach()", "function(f)"]);
        let walk = walk(&cmds);
        let lines: Vec<usize> = walk.issues.iter().map(|(l, _)| *l).collect();
        assert_eq!(lines, vec![1, 2, 4, 5]);
        assert!(matches!(walk.issues[0].1, BlockIssue::UnmatchedClose { .. }));
        assert!(matches!(walk.issues[1].1, BlockIssue::MiddleOutsideIf { .. }));
        assert!(matches!(
            walk.issues[2].1,
            BlockIssue::MismatchedClose {
                open: BlockKind::While,
                opened_at: 3,
                ..
            }
        ));
        assert_eq!(
            walk.issues[3].1,
            BlockIssue::Unclosed {
                kind: BlockKind::Function
            }
        );
    }
}
