//! Raw line helpers.

/// Leading spaces and tabs of a line.
#[must_use]
pub fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

/// Width of a line in columns, counting characters and giving each tab
/// `tab_width` columns.
#[must_use]
pub fn display_width(line: &str, tab_width: usize) -> usize {
    line.chars()
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum()
}

/// Returns true if the line ends in a space or tab.
#[must_use]
pub fn has_trailing_whitespace(line: &str) -> bool {
    line.ends_with([' ', '\t'])
}
