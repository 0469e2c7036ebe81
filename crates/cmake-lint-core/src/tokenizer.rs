//! Command tokenizer.
//!
//! Turns the physical lines of one command span into a [`Command`]: the name
//! before the first unquoted `(` and the whitespace-separated arguments up to
//! the matching `)`. Quoted runs are single arguments, also when they start
//! in the middle of an unquoted argument (`-DMSG="a  b"`); nested parentheses
//! are kept as their own `(` / `)` arguments.

use thiserror::Error;

/// One argument of a command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Source text of the argument, quotes and escapes included.
    pub raw: String,
    /// Whether the argument is a quoted string.
    pub quoted: bool,
    /// Physical line the argument starts on (1-based).
    pub line: usize,
    /// Character offset of the argument within that line (0-based).
    pub offset: usize,
}

impl Argument {
    /// Argument text with surrounding quotes removed.
    #[must_use]
    pub fn value(&self) -> &str {
        if self.quoted {
            let inner = self.raw.strip_prefix('"').unwrap_or(&self.raw);
            inner.strip_suffix('"').unwrap_or(inner)
        } else {
            &self.raw
        }
    }

    /// Width of the argument in characters on its starting line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.raw.split('\n').next().map_or(0, |first| first.chars().count())
    }

    /// Whether the argument continues onto later lines.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.raw.contains('\n')
    }
}

/// A tokenized command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command name exactly as written.
    pub name: String,
    /// Arguments in source order.
    pub args: Vec<Argument>,
    /// Line the command starts on (1-based).
    pub line: usize,
    /// Last line of the command (1-based, inclusive).
    pub end_line: usize,
    /// Leading whitespace before the name.
    pub indent: String,
    /// Whitespace between the name and `(`.
    pub name_gap: String,
    /// Whitespace after `(` when an argument or `)` follows on the same line.
    pub open_padding: Option<usize>,
    /// Whitespace before the closing `)` when something precedes it on its line.
    pub close_padding: Option<usize>,
}

impl Command {
    /// Lower-cased command name, for case-insensitive matching.
    #[must_use]
    pub fn name_lower(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    /// Returns true if the name matches `other` ignoring ASCII case.
    #[must_use]
    pub fn is(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other)
    }

    /// First argument, if any.
    #[must_use]
    pub fn first_arg(&self) -> Option<&Argument> {
        self.args.first()
    }
}

/// Why a span could not be read as a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// No identifier at the start of the span.
    #[error("line {line}: expected a command name")]
    MissingName {
        /// Starting line of the span.
        line: usize,
    },
    /// The identifier is not followed by `(`.
    #[error("line {line}: expected '(' after '{name}'")]
    MissingParen {
        /// Starting line of the span.
        line: usize,
        /// The identifier that was found.
        name: String,
    },
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug)]
struct Pending {
    raw: String,
    line: usize,
    offset: usize,
    quoted: bool,
    open_quote: bool,
}

#[derive(Debug, Default)]
struct ArgScanner {
    args: Vec<Argument>,
    pending: Option<Pending>,
    depth: usize,
    close_padding: Option<usize>,
    closed_on: Option<usize>,
}

impl ArgScanner {
    fn flush(&mut self) {
        if let Some(p) = self.pending.take() {
            self.args.push(Argument {
                raw: p.raw,
                quoted: p.quoted,
                line: p.line,
                offset: p.offset,
            });
        }
    }

    fn push_char(&mut self, c: char, line: usize, offset: usize) {
        match &mut self.pending {
            Some(p) => p.raw.push(c),
            None => {
                self.pending = Some(Pending {
                    raw: c.to_string(),
                    line,
                    offset,
                    quoted: false,
                    open_quote: false,
                });
            }
        }
    }

    fn in_open_quote(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.open_quote)
    }

    /// Scans `chars[from..]` of one physical line. Returns true once the
    /// outer `)` has been consumed.
    fn scan_line(&mut self, chars: &[char], from: usize, line: usize) -> bool {
        let mut i = from;
        while i < chars.len() {
            let c = chars[i];

            if self.in_open_quote() {
                if let Some(p) = &mut self.pending {
                    p.raw.push(c);
                    if c == '\\' {
                        if let Some(&next) = chars.get(i + 1) {
                            p.raw.push(next);
                            i += 1;
                        }
                    } else if c == '"' {
                        p.open_quote = false;
                    }
                }
                // A quoted argument ends at its closing quote; a quote inside
                // an unquoted argument only ends the quoted run.
                if self.pending.as_ref().is_some_and(|p| p.quoted && !p.open_quote) {
                    self.flush();
                }
                i += 1;
                continue;
            }

            match c {
                c if c.is_whitespace() => self.flush(),
                '#' => {
                    self.flush();
                    return false;
                }
                '"' => match &mut self.pending {
                    Some(p) => {
                        p.raw.push('"');
                        p.open_quote = true;
                    }
                    None => {
                        self.pending = Some(Pending {
                            raw: String::from('"'),
                            line,
                            offset: i,
                            quoted: true,
                            open_quote: true,
                        });
                    }
                },
                '\\' => {
                    self.push_char(c, line, i);
                    if let Some(&next) = chars.get(i + 1) {
                        self.push_char(next, line, i);
                        i += 1;
                    }
                }
                '(' => {
                    self.flush();
                    self.depth += 1;
                    self.push_char('(', line, i);
                    self.flush();
                }
                ')' => {
                    self.flush();
                    if self.depth == 0 {
                        let before = chars[..i].iter().rev().take_while(|c| c.is_whitespace());
                        let padding = before.count();
                        self.close_padding = (padding < i).then_some(padding);
                        self.closed_on = Some(line);
                        return true;
                    }
                    self.depth -= 1;
                    self.push_char(')', line, i);
                    self.flush();
                }
                _ => self.push_char(c, line, i),
            }
            i += 1;
        }

        // Quoted arguments carry their newline into the next physical line.
        if let Some(p) = &mut self.pending {
            if p.open_quote {
                p.raw.push('\n');
                return false;
            }
        }
        self.flush();
        false
    }
}

/// Tokenizes the physical lines of a command span.
///
/// `first_line` is the 1-based number of `lines[0]`. Unterminated quotes or
/// parentheses still produce a command holding whatever arguments could be
/// read; the line classifier reports those spans.
///
/// # Errors
///
/// Returns [`TokenizeError`] when the span does not start with `name(`.
pub fn tokenize<S: AsRef<str>>(lines: &[S], first_line: usize) -> Result<Command, TokenizeError> {
    let first: Vec<char> = lines
        .first()
        .map(|l| l.as_ref().chars().collect())
        .unwrap_or_default();

    let indent_len = first.iter().take_while(|c| c.is_whitespace()).count();
    let mut pos = indent_len;

    if !first.get(pos).copied().is_some_and(is_ident_start) {
        return Err(TokenizeError::MissingName { line: first_line });
    }
    let name_start = pos;
    while first.get(pos).copied().is_some_and(is_ident_char) {
        pos += 1;
    }
    let name: String = first[name_start..pos].iter().collect();

    let gap_start = pos;
    while first.get(pos).is_some_and(|c| *c == ' ' || *c == '\t') {
        pos += 1;
    }
    if first.get(pos) != Some(&'(') {
        return Err(TokenizeError::MissingParen {
            line: first_line,
            name,
        });
    }
    let name_gap: String = first[gap_start..pos].iter().collect();
    let paren = pos;

    let after = first[paren + 1..]
        .iter()
        .take_while(|c| c.is_whitespace())
        .count();
    let open_padding = match first.get(paren + 1 + after) {
        None | Some('#') => None,
        Some(_) => Some(after),
    };

    let mut scanner = ArgScanner::default();
    let mut terminated = scanner.scan_line(&first, paren + 1, first_line);
    for (index, line) in lines.iter().enumerate().skip(1) {
        if terminated {
            break;
        }
        let chars: Vec<char> = line.as_ref().chars().collect();
        terminated = scanner.scan_line(&chars, 0, first_line + index);
    }
    if !terminated {
        if let Some(p) = &mut scanner.pending {
            if p.raw.ends_with('\n') {
                p.raw.pop();
            }
        }
        scanner.flush();
    }

    let end_line = scanner
        .closed_on
        .unwrap_or(first_line + lines.len().saturating_sub(1));

    Ok(Command {
        name,
        args: scanner.args,
        line: first_line,
        end_line,
        indent: first[..indent_len].iter().collect(),
        name_gap,
        open_padding,
        close_padding: scanner.close_padding,
    })
}
