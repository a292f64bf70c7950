//! Nesting flat sections into a tree by heading level.
//!
//! The builder keeps the currently open path from the root as a stack of
//! owned sections. A new section first closes every open section whose level
//! is greater than or equal to its own (each closed section is appended to
//! the children of the section below it), then opens itself. A heading thus
//! lands under the nearest preceding heading with a strictly lower level.

use crate::error::ParseError;
use crate::line::check_level;
use crate::section::Section;

/// Nest an ordered list of flat sections under its first section.
///
/// The first section must be level 1 and is the unique root; every later
/// section must be deeper than level 1. Heading levels need not be
/// contiguous: a level 4 section right after the root becomes a direct child.
///
/// Line numbers in errors assume the sections came from [`segment`](crate::segment):
/// each section spans its heading line plus its content lines.
///
/// Runs in O(n): each section is pushed once and popped at most once.
///
/// # Errors
///
/// - [`ParseError::Empty`] if `sections` is empty
/// - [`ParseError::InvalidHeadingLevel`] for a level outside `1..=6`
/// - [`ParseError::RootLevel`] if the first section is not level 1
/// - [`ParseError::MultipleRoots`] if any later section is level 1
pub fn build(sections: Vec<Section>) -> Result<Section, ParseError> {
    let mut sections = sections.into_iter();
    let root = sections.next().ok_or(ParseError::Empty)?;
    check_level(root.heading.level, 1)?;
    if root.heading.level != 1 {
        return Err(ParseError::RootLevel {
            level: root.heading.level,
        });
    }

    let mut line = 1 + root.content.len();
    let mut stack = vec![root.detached()];
    for section in sections {
        line += 1;
        let level = section.heading.level;
        check_level(level, line)?;
        if level == 1 {
            return Err(ParseError::MultipleRoots {
                text: section.heading.text,
            });
        }
        line += section.content.len();
        // The root is level 1 and `level > 1`, so the root is never closed here.
        while stack.len() > 1 && stack.last().is_some_and(|top| level <= top.heading.level) {
            close_top(&mut stack);
        }
        stack.push(section.detached());
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    let root = stack.pop().ok_or(ParseError::Empty)?;

    tracing::trace!(sections = root.section_count(), "Built section tree");
    Ok(root)
}

/// Pop the top of the stack and attach it as the last child of the new top.
fn close_top(stack: &mut Vec<Section>) {
    if let Some(child) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(child);
    }
}
