//! Sections and heading-delimited segmentation.

use crate::error::ParseError;
use crate::line::{Heading, Line, check_level};

/// A heading, the plain lines that follow it, and its nested sub-sections.
///
/// `content` only ever holds the raw lines between this heading and the next
/// heading of any level. `children` stays empty until the tree builder
/// re-homes sections under their parents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Heading that opens the section.
    pub heading: Heading,
    /// Lines up to the next heading of any level, verbatim and in order.
    pub content: Vec<String>,
    /// Nested sub-sections in document order.
    pub children: Vec<Section>,
}

impl Section {
    /// Create a childless section with no content.
    #[must_use]
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            content: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style content setter.
    #[must_use]
    pub fn with_content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Build a section from a group of lines whose first element is a heading.
    ///
    /// Returns `None` when the group is empty, starts with plain text, or
    /// contains a second heading.
    pub fn from_lines<I: IntoIterator<Item = Line>>(lines: I) -> Option<Self> {
        let mut lines = lines.into_iter();
        let Some(Line::Heading(heading)) = lines.next() else {
            return None;
        };
        let mut section = Self::new(heading);
        for line in lines {
            match line {
                Line::Text(text) => section.content.push(text),
                Line::Heading(_) => return None,
            }
        }
        Some(section)
    }

    /// Whether this section has no sub-sections.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The same section with its children dropped.
    #[must_use]
    pub(crate) fn detached(self) -> Self {
        Self {
            children: Vec::new(),
            ..self
        }
    }

    /// Iterate this section and all descendants in pre-order.
    ///
    /// Children are visited in their original order, so the iteration order
    /// is document order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Total number of sections in this subtree, including `self`.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.iter().count()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Section;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a section tree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Section>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Section;

    fn next(&mut self) -> Option<Self::Item> {
        let section = self.stack.pop()?;
        self.stack.extend(section.children.iter().rev());
        Some(section)
    }
}

/// Group classified lines into flat sections, splitting before every heading.
///
/// # Errors
///
/// - [`ParseError::Empty`] if there are no lines
/// - [`ParseError::MissingRootHeading`] if the first line is plain text
/// - [`ParseError::InvalidHeadingLevel`] for a heading outside `1..=6`
pub fn segment<I: IntoIterator<Item = Line>>(lines: I) -> Result<Vec<Section>, ParseError> {
    let mut groups: Vec<Vec<Line>> = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let number = idx + 1;
        if let Some(heading) = line.as_heading() {
            check_level(heading.level, number)?;
            groups.push(vec![line]);
        } else if let Some(group) = groups.last_mut() {
            group.push(line);
        } else {
            return Err(ParseError::MissingRootHeading { line: number });
        }
    }

    if groups.is_empty() {
        return Err(ParseError::Empty);
    }
    // Every group opens with its only heading, so none is dropped here.
    Ok(groups.into_iter().filter_map(Section::from_lines).collect())
}
