//! Line classification.
//!
//! Each raw input line is classified on its own, without looking at its
//! neighbours: a leading run of `#` markers makes it a [`Heading`], anything
//! else (including an empty line) stays plain text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

/// Highest heading level accepted by the segmenter and tree builder.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Leading marker run followed by the heading text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)(.*)$").expect("heading regex is valid"));

/// A heading line: nesting level and trimmed title text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Title text with surrounding whitespace removed.
    pub text: String,
    /// Number of leading markers.
    pub level: usize,
}

impl Heading {
    /// Create a heading.
    #[must_use]
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// A classified document line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Line starting with one or more `#` markers.
    Heading(Heading),
    /// Any other line, kept verbatim. Empty lines are meaningful separators.
    Text(String),
}

impl Line {
    /// Returns the heading if this line is one.
    #[must_use]
    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Self::Heading(heading) => Some(heading),
            Self::Text(_) => None,
        }
    }
}

/// Classify a single raw line.
///
/// Never fails: a line either matches the heading pattern or is returned
/// unchanged as [`Line::Text`].
///
/// # Examples
///
/// ```
/// use sefer_parser::{Heading, Line, classify};
///
/// assert_eq!(classify("## Steps "), Line::Heading(Heading::new("Steps", 2)));
/// assert_eq!(classify("Boil water."), Line::Text("Boil water.".to_owned()));
/// ```
pub fn classify(line: &str) -> Line {
    match HEADING_RE.captures(line) {
        Some(caps) => {
            let level = caps.get(1).map_or(0, |m| m.len());
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            Line::Heading(Heading::new(text, level))
        }
        None => Line::Text(line.to_owned()),
    }
}

/// Reject a heading level outside `1..=MAX_HEADING_LEVEL`.
pub(crate) fn check_level(level: usize, line: usize) -> Result<(), ParseError> {
    if (1..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(ParseError::InvalidHeadingLevel { level, line })
    }
}

/// Classify every line of a document, preserving order.
pub fn classify_lines(text: &str) -> impl Iterator<Item = Line> + '_ {
    text.lines().map(classify)
}
