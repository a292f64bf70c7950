//! Parse error types.

use crate::line::MAX_HEADING_LEVEL;

/// Error returned when a document cannot be structured into a section tree.
///
/// Every variant describes a malformed document. Parsing fails the document
/// as a whole: no partial tree is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The document has no lines at all.
    #[error("document is empty")]
    Empty,
    /// The first line is plain text instead of a heading.
    #[error("line {line}: document must start with a level 1 heading")]
    MissingRootHeading {
        /// 1-based line number of the offending line.
        line: usize,
    },
    /// The first heading is not at level 1.
    #[error("document must start with a level 1 heading, found level {level}")]
    RootLevel {
        /// Level of the first heading.
        level: usize,
    },
    /// A heading level outside `1..=MAX_HEADING_LEVEL`.
    #[error(
        "line {line}: heading level {level} is outside 1..={max}",
        max = MAX_HEADING_LEVEL
    )]
    InvalidHeadingLevel {
        /// Level found on the line.
        level: usize,
        /// 1-based line number.
        line: usize,
    },
    /// A second level 1 heading; the root must be unique.
    #[error("document has more than one level 1 heading: {text:?}")]
    MultipleRoots {
        /// Text of the extra level 1 heading.
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::Empty.to_string(), "document is empty");
        assert_eq!(
            ParseError::MissingRootHeading { line: 1 }.to_string(),
            "line 1: document must start with a level 1 heading"
        );
        assert_eq!(
            ParseError::InvalidHeadingLevel { level: 7, line: 4 }.to_string(),
            "line 4: heading level 7 is outside 1..=6"
        );
    }

    #[test]
    fn test_invalid_level_reports_marker_count() {
        assert_eq!(
            ParseError::InvalidHeadingLevel { level: 300, line: 2 }.to_string(),
            "line 2: heading level 300 is outside 1..=6"
        );
    }
}
