//! Heading-delimited document parsing for sefer.
//!
//! Turns a recipe written with `#` heading markers into a tree of
//! [`Section`]s in three steps:
//!
//! 1. **Classification** ([`classify`]): each line becomes a [`Line::Heading`]
//!    or stays [`Line::Text`]
//! 2. **Segmentation** ([`segment`]): the line sequence is split before every
//!    heading into flat, childless sections
//! 3. **Tree building** ([`build`]): sections are nested by heading level with
//!    a stack, under the single level 1 root
//!
//! Any structural problem fails the whole document with a [`ParseError`];
//! no partial tree is ever returned.
//!
//! # Example
//!
//! ```
//! use sefer_parser::parse_document;
//!
//! let root = parse_document("# Soup\nGood soup.\n## Ingredients\nWater")?;
//! assert_eq!(root.heading.text, "Soup");
//! assert_eq!(root.children[0].content, vec!["Water"]);
//! # Ok::<(), sefer_parser::ParseError>(())
//! ```

mod error;
mod line;
mod section;
mod tree;

pub use error::ParseError;
pub use line::{Heading, Line, MAX_HEADING_LEVEL, classify, classify_lines};
pub use section::{PreOrder, Section, segment};
pub use tree::build;

/// Classify and segment a document into flat sections.
pub fn parse_sections(text: &str) -> Result<Vec<Section>, ParseError> {
    segment(classify_lines(text))
}

/// Parse a document into its section tree.
pub fn parse_document(text: &str) -> Result<Section, ParseError> {
    let sections = parse_sections(text)?;
    tracing::debug!(sections = sections.len(), "Segmented document");
    build(sections)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SOUP: &str = "# Soup\nGood soup.\n## Ingredients\nWater\nSalt\n\n## Steps\nBoil water.\n\nAdd salt.";

    #[test]
    fn test_parse_document_builds_tree() {
        let root = parse_document(SOUP).unwrap();

        assert_eq!(root.heading, Heading::new("Soup", 1));
        assert_eq!(root.content, vec!["Good soup."]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].heading, Heading::new("Ingredients", 2));
        assert_eq!(root.children[0].content, vec!["Water", "Salt", ""]);
        assert_eq!(root.children[1].heading, Heading::new("Steps", 2));
        assert_eq!(root.children[1].content, vec!["Boil water.", "", "Add salt."]);
    }

    #[test]
    fn test_tree_headings_match_segmented_headings() {
        let doc = "# R\n### a\n## b\n#### c\n### d\n## e\nx\n###### f";
        let flat: Vec<Heading> = parse_sections(doc)
            .unwrap()
            .into_iter()
            .map(|s| s.heading)
            .collect();
        let root = parse_document(doc).unwrap();
        let nested: Vec<Heading> = root.iter().map(|s| s.heading.clone()).collect();
        assert_eq!(nested, flat);
    }

    #[test]
    fn test_level_three_then_two_are_siblings() {
        let root = parse_document("# Root\n### Deep\n## Shallow").unwrap();
        let children: Vec<_> = root.children.iter().map(|c| &c.heading).collect();
        assert_eq!(
            children,
            vec![&Heading::new("Deep", 3), &Heading::new("Shallow", 2)]
        );
        assert!(root.children.iter().all(Section::is_leaf));
    }

    #[test]
    fn test_plain_first_line_is_malformed() {
        let err = parse_document("Soup\n# Soup").unwrap_err();
        assert_eq!(err, ParseError::MissingRootHeading { line: 1 });
    }

    #[test]
    fn test_empty_document_is_malformed() {
        assert_eq!(parse_document(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_marker_run_too_long_reports_real_level() {
        let doc = format!("# Soup\n{} Deep", "#".repeat(300));
        assert_eq!(
            parse_document(&doc),
            Err(ParseError::InvalidHeadingLevel { level: 300, line: 2 })
        );
    }

    #[test]
    fn test_level_two_first_heading_is_malformed() {
        assert_eq!(
            parse_document("## Soup\ntext"),
            Err(ParseError::RootLevel { level: 2 })
        );
    }
}
