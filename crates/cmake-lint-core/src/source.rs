//! Source files as handed to the linter.

use std::path::{Path, PathBuf};

/// How a file's content ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalNewline {
    /// The file is empty.
    Empty,
    /// Content does not end with `\n`.
    Missing,
    /// Content ends with exactly one `\n`.
    Single,
    /// Content ends with `\n` followed by this many blank lines.
    Extra(usize),
}

/// One build-description file: its path and raw physical lines.
///
/// Lines are stored without their terminators; a trailing `\r` is stripped
/// and remembered for the newline checks.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
    final_newline: FinalNewline,
    first_carriage_return: Option<usize>,
}

impl SourceFile {
    /// Splits raw file content into physical lines.
    #[must_use]
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let mut lines: Vec<String> = Vec::new();
        let mut first_carriage_return = None;

        if !content.is_empty() {
            let body = content.strip_suffix('\n').unwrap_or(content);
            for (index, raw) in body.split('\n').enumerate() {
                let line = raw.strip_suffix('\r').unwrap_or(raw);
                if first_carriage_return.is_none() && raw.contains('\r') {
                    first_carriage_return = Some(index + 1);
                }
                lines.push(line.to_string());
            }
        }

        let final_newline = if content.is_empty() {
            FinalNewline::Empty
        } else if !content.ends_with('\n') {
            FinalNewline::Missing
        } else {
            let blank_tail = lines.iter().rev().take_while(|l| l.is_empty()).count();
            if blank_tail == 0 {
                FinalNewline::Single
            } else {
                FinalNewline::Extra(blank_tail)
            }
        };

        Self {
            path: path.into(),
            lines,
            final_newline,
            first_carriage_return,
        }
    }

    /// Wraps lines that were already split by the caller.
    ///
    /// The content is assumed to be terminated by a single `\n`.
    #[must_use]
    pub fn from_lines<I, S>(path: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let final_newline = if lines.is_empty() {
            FinalNewline::Empty
        } else {
            FinalNewline::Single
        };
        Self {
            path: path.into(),
            lines,
            final_newline,
            first_carriage_return: None,
        }
    }

    /// Path identifying this file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All physical lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the physical line with the given 1-based number.
    #[must_use]
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Number of physical lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// How the original content ended.
    #[must_use]
    pub fn final_newline(&self) -> FinalNewline {
        self.final_newline
    }

    /// First line that contained a carriage return, if any.
    #[must_use]
    pub fn first_carriage_return(&self) -> Option<usize> {
        self.first_carriage_return
    }

    /// Lines joined with `\n`, as used for rich rendering.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Byte offset and length of a 1-based line within [`Self::text`].
    ///
    /// Line 0 and out-of-range lines map to an empty span at offset 0.
    #[must_use]
    pub fn span_of_line(&self, number: usize) -> (usize, usize) {
        if number == 0 || number > self.lines.len() {
            return (0, 0);
        }
        let offset: usize = self.lines[..number - 1].iter().map(|l| l.len() + 1).sum();
        (offset, self.lines[number - 1].len())
    }
}
