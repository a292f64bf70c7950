//! Rendered fragments and the per-role block formatting rules.

use sefer_parser::Heading;

use crate::role::Role;

/// Formatted payload of one section, shaped by its role.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum FragmentBody {
    /// Non-empty lines joined with line breaks.
    Description(String),
    /// One item per non-empty line.
    Ingredients(Vec<String>),
    /// One step per block between runs of empty lines.
    Steps(Vec<String>),
}

impl FragmentBody {
    /// Format section content under the given role.
    ///
    /// [`Role::None`] and [`Role::Title`] both use the description rule.
    #[must_use]
    pub fn format(role: Role, content: &[String]) -> Self {
        match role {
            Role::None | Role::Title => Self::Description(describe(content)),
            Role::Ingredients => Self::Ingredients(list_items(content)),
            Role::Preparation => Self::Steps(split_steps(content)),
        }
    }

    /// Whether the body holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Description(text) => text.is_empty(),
            Self::Ingredients(items) | Self::Steps(items) => items.is_empty(),
        }
    }
}

/// One rendered unit, produced for exactly one section of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fragment {
    /// Heading of the section this fragment renders.
    pub heading: Heading,
    /// Effective role: the section's own or the one inherited from its ancestors.
    pub role: Role,
    /// Depth in the tree; the root is 0.
    pub depth: usize,
    /// Whether a new role container starts at this fragment.
    ///
    /// True for the root and for every section whose role differs from its
    /// parent's. The container spans the fragment and all of its descendants.
    pub opens_container: bool,
    /// Section content formatted under `role`.
    pub body: FragmentBody,
}

/// A line that separates steps or is dropped from lists.
///
/// Only a line with no characters at all counts; whitespace is content.
fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Join non-empty lines with line breaks.
pub fn describe(content: &[String]) -> String {
    content
        .iter()
        .map(String::as_str)
        .filter(|line| !is_blank(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep non-empty lines as list items, in order.
pub fn list_items(content: &[String]) -> Vec<String> {
    content
        .iter()
        .filter(|line| !is_blank(line))
        .cloned()
        .collect()
}

/// Split content into steps at runs of empty lines.
///
/// Lines within a block are joined with a line break; blocks that end up
/// empty are dropped.
pub fn split_steps(content: &[String]) -> Vec<String> {
    let mut steps = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in content {
        if is_blank(line) {
            if !block.is_empty() {
                steps.push(block.join("\n"));
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        steps.push(block.join("\n"));
    }
    steps
}
