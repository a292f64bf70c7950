//! Flat recipe summary extracted from rendered fragments.

use crate::fragment::{Fragment, FragmentBody};

/// A recipe reduced to its title, description, ingredients and steps.
///
/// Ingredients and steps are gathered from every fragment rendered under the
/// respective role, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recipe {
    /// Text of the root heading.
    pub name: String,
    /// Description of the root section.
    pub description: String,
    /// Every ingredient item, in document order.
    pub ingredients: Vec<String>,
    /// Every preparation step, in document order.
    pub steps: Vec<String>,
}

impl Recipe {
    /// Build the summary from pre-order fragments. The first fragment is the root.
    #[must_use]
    pub fn from_fragments(fragments: &[Fragment]) -> Self {
        let mut recipe = Self::default();
        let Some(root) = fragments.first() else {
            return recipe;
        };
        recipe.name.clone_from(&root.heading.text);
        if let FragmentBody::Description(text) = &root.body {
            recipe.description.clone_from(text);
        }

        for fragment in fragments {
            match &fragment.body {
                FragmentBody::Ingredients(items) => recipe.ingredients.extend_from_slice(items),
                FragmentBody::Steps(steps) => recipe.steps.extend_from_slice(steps),
                FragmentBody::Description(_) => {}
            }
        }
        recipe
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sefer_parser::parse_document;

    use super::*;
    use crate::renderer::render;

    fn recipe(doc: &str) -> Recipe {
        Recipe::from_fragments(&render(&parse_document(doc).unwrap()))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_whitespace_only_lines_are_kept() {
        let r = recipe("# T\n## Ingredients\nWater\n   \nSalt\n## Steps\nBoil\n \nServe");
        assert_eq!(r.ingredients, strings(&["Water", "   ", "Salt"]));
        assert_eq!(r.steps, strings(&["Boil\n \nServe"]));
    }

    #[test]
    fn test_soup() {
        assert_eq!(
            recipe("# Soup\nGood soup.\n## Ingredients\nWater\nSalt\n\n## Steps\nBoil water.\n\nAdd salt."),
            Recipe {
                name: "Soup".to_owned(),
                description: "Good soup.".to_owned(),
                ingredients: strings(&["Water", "Salt"]),
                steps: strings(&["Boil water.", "Add salt."]),
            }
        );
    }

    #[test]
    fn test_hebrew_headings() {
        let r = recipe("# מרק\n## חומרים\nמים\nמלח\n## הוראות הכנה\nלהרתיח.\n\nלהוסיף מלח.");
        assert_eq!(r.name, "מרק");
        assert_eq!(r.ingredients, strings(&["מים", "מלח"]));
        assert_eq!(r.steps, strings(&["להרתיח.", "להוסיף מלח."]));
    }

    #[test]
    fn test_gathers_nested_sections() {
        let r = recipe(
            "# Pie\n## Ingredients\n### Crust\nFlour\n### Filling\nApples\n## Steps\nRoll.\n### Baking\nBake.",
        );
        assert_eq!(r.ingredients, strings(&["Flour", "Apples"]));
        assert_eq!(r.steps, strings(&["Roll.", "Bake."]));
    }

    #[test]
    fn test_lines_between_role_headings_appear_once() {
        let r = recipe("# T\nabout\n## Ingredients\na\n\nb\n## Steps\nc\n\nd\ne");
        let mut all: Vec<&str> = r.ingredients.iter().map(String::as_str).collect();
        all.extend(r.steps.iter().flat_map(|s| s.lines()));
        assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_without_role_sections() {
        let r = recipe("# Toast\nBread.\n## Notes\nButter.");
        assert_eq!(r.description, "Bread.");
        assert!(r.ingredients.is_empty());
        assert!(r.steps.is_empty());
    }

    #[test]
    fn test_empty_fragments() {
        assert_eq!(Recipe::from_fragments(&[]), Recipe::default());
    }
}
