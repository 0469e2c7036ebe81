//! Line classification: physical lines to logical line spans.
//!
//! A command invocation extends across physical lines until its parentheses
//! balance. Parentheses inside quoted arguments, after an escape, or after a
//! `#` comment marker do not count.

/// Classification of a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// Line holding only a comment.
    Comment,
    /// Line that starts a command invocation.
    Command,
}

/// Construct left open when the file ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    /// A quoted argument was never closed.
    Quote,
    /// The command's parentheses never balanced.
    Paren,
}

/// A contiguous span of physical lines parsed as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// First physical line (1-based).
    pub start: usize,
    /// Last physical line (1-based, inclusive).
    pub end: usize,
    /// `Blank`, `Comment` or `Command`.
    pub kind: LineKind,
    /// Set when the command could not be closed before end of file. The span
    /// is then collapsed to its first line.
    pub unterminated: Option<Unterminated>,
}

impl LogicalLine {
    fn single(line: usize, kind: LineKind) -> Self {
        Self {
            start: line,
            end: line,
            kind,
            unterminated: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct ScanState {
    depth: usize,
    in_quote: bool,
    opened: bool,
}

impl ScanState {
    fn is_closed(self) -> bool {
        self.opened && self.depth == 0 && !self.in_quote
    }

    /// Advances the state over one physical line.
    fn scan(&mut self, line: &str) {
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if self.in_quote {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '"' => self.in_quote = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => self.in_quote = true,
                '#' => return,
                '(' => {
                    self.depth += 1;
                    self.opened = true;
                }
                ')' => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.is_closed() {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Splits physical lines into logical line spans.
///
/// The returned spans partition `1..=lines.len()` in order.
#[must_use]
pub fn classify<S: AsRef<str>>(lines: &[S]) -> Vec<LogicalLine> {
    let mut spans = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let number = index + 1;
        let text = lines[index].as_ref();
        let trimmed = text.trim();

        if trimmed.is_empty() {
            spans.push(LogicalLine::single(number, LineKind::Blank));
            index += 1;
            continue;
        }
        if trimmed.starts_with('#') {
            spans.push(LogicalLine::single(number, LineKind::Comment));
            index += 1;
            continue;
        }

        let mut state = ScanState::default();
        state.scan(text);
        if !state.opened || state.is_closed() {
            spans.push(LogicalLine::single(number, LineKind::Command));
            index += 1;
            continue;
        }

        let mut next = index + 1;
        while next < lines.len() && !state.is_closed() {
            state.scan(lines[next].as_ref());
            next += 1;
        }

        if state.is_closed() {
            spans.push(LogicalLine {
                start: number,
                end: next,
                kind: LineKind::Command,
                unterminated: None,
            });
            index = next;
        } else {
            tracing::debug!("command at line {number} never closes; collapsing span");
            let reason = if state.in_quote {
                Unterminated::Quote
            } else {
                Unterminated::Paren
            };
            spans.push(LogicalLine {
                unterminated: Some(reason),
                ..LogicalLine::single(number, LineKind::Command)
            });
            index += 1;
        }
    }

    spans
}
