//! Command name casing.

/// Casing style of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// All cased letters are lower case.
    Lower,
    /// All cased letters are upper case.
    Upper,
    /// Both upper and lower case letters.
    Mixed,
    /// No cased letters at all.
    Uncased,
}

impl CaseStyle {
    /// Classifies an identifier.
    #[must_use]
    pub fn of(name: &str) -> Self {
        let has_lower = name.chars().any(char::is_lowercase);
        let has_upper = name.chars().any(char::is_uppercase);
        match (has_lower, has_upper) {
            (true, true) => Self::Mixed,
            (true, false) => Self::Lower,
            (false, true) => Self::Upper,
            (false, false) => Self::Uncased,
        }
    }

    /// Human-readable name for messages.
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::Lower => "lower case",
            Self::Upper => "upper case",
            Self::Mixed => "mixed case",
            Self::Uncased => "uncased",
        }
    }
}

/// Majority casing among single-case names.
///
/// Ties go to the style of the first single-case name. Returns `None` when
/// no name is written in a single case.
#[must_use]
pub fn dominant_style<'a, I>(names: I) -> Option<CaseStyle>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lower = 0usize;
    let mut upper = 0usize;
    let mut first = None;
    for name in names {
        match CaseStyle::of(name) {
            CaseStyle::Lower => lower += 1,
            CaseStyle::Upper => upper += 1,
            CaseStyle::Mixed | CaseStyle::Uncased => continue,
        }
        if first.is_none() {
            first = Some(CaseStyle::of(name));
        }
    }
    match lower.cmp(&upper) {
        std::cmp::Ordering::Greater => Some(CaseStyle::Lower),
        std::cmp::Ordering::Less => Some(CaseStyle::Upper),
        std::cmp::Ordering::Equal => first,
    }
}
