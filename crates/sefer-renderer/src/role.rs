//! Heading-to-role resolution.

use sefer_parser::Heading;

/// Only headings at this level can carry a role.
pub const ROLE_LEVEL: usize = 2;

/// Recognised heading texts for each role at [`ROLE_LEVEL`].
///
/// Matching is exact: case- and whitespace-sensitive on the already trimmed
/// heading text.
const ROLE_TABLE: &[(Role, &[&str])] = &[
    (Role::Ingredients, &["Ingredients", "חומרים"]),
    (
        Role::Preparation,
        &["Preparation", "Steps", "Instructions", "הוראות", "הוראות הכנה"],
    ),
];

/// Semantic purpose of a section for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// No role of its own; the section inherits from its ancestors.
    #[default]
    None,
    /// Title and free-text description. Default for the root.
    Title,
    /// Ingredient list, one item per non-empty line.
    Ingredients,
    /// Preparation steps, one per block between empty lines.
    Preparation,
}

impl Role {
    /// Stable lowercase name, used for CSS classes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Title => "title",
            Self::Ingredients => "ingredients",
            Self::Preparation => "preparation",
        }
    }

    /// Whether this is [`Role::None`].
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

/// Resolve the role a heading assigns to its section.
///
/// Headings at any level other than [`ROLE_LEVEL`] resolve to [`Role::None`]
/// regardless of text, as does unrecognised text at that level.
pub fn resolve(heading: &Heading) -> Role {
    if heading.level != ROLE_LEVEL {
        return Role::None;
    }
    ROLE_TABLE
        .iter()
        .find(|(_, texts)| texts.contains(&heading.text.as_str()))
        .map_or(Role::None, |(role, _)| *role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ingredients() {
        assert_eq!(resolve(&Heading::new("Ingredients", 2)), Role::Ingredients);
        assert_eq!(resolve(&Heading::new("חומרים", 2)), Role::Ingredients);
    }

    #[test]
    fn test_resolve_preparation_synonyms() {
        for text in ["Preparation", "Steps", "Instructions", "הוראות", "הוראות הכנה"] {
            assert_eq!(resolve(&Heading::new(text, 2)), Role::Preparation, "{text}");
        }
    }

    #[test]
    fn test_resolve_wrong_level() {
        assert_eq!(resolve(&Heading::new("Ingredients", 1)), Role::None);
        assert_eq!(resolve(&Heading::new("Steps", 3)), Role::None);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve(&Heading::new("ingredients", 2)), Role::None);
        assert_eq!(resolve(&Heading::new("STEPS", 2)), Role::None);
    }

    #[test]
    fn test_resolve_unrecognised_text() {
        assert_eq!(resolve(&Heading::new("Serving suggestions", 2)), Role::None);
        assert_eq!(resolve(&Heading::new("", 2)), Role::None);
    }

    #[test]
    fn test_table_texts_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (_, texts) in ROLE_TABLE {
            for text in *texts {
                assert!(seen.insert(*text), "duplicate role text {text}");
            }
        }
    }

    #[test]
    fn test_role_names() {
        assert_eq!(Role::Title.name(), "title");
        assert_eq!(Role::Preparation.name(), "preparation");
        assert!(Role::default().is_none());
    }
}
