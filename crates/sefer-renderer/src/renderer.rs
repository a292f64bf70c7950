//! Tree traversal with role inheritance.

use sefer_parser::Section;

use crate::fragment::{Fragment, FragmentBody};
use crate::role::{Role, resolve};

/// Render a section tree into fragments, one per section, in pre-order.
///
/// The active role starts as the root's own role, falling back to
/// [`Role::Title`]. A section whose heading resolves to a role replaces the
/// active role for itself and its whole subtree; any other section renders
/// under the role inherited from its nearest resolved ancestor.
pub fn render(root: &Section) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(root.section_count());
    let own = resolve(&root.heading);
    let default = if own.is_none() { Role::Title } else { own };
    render_section(root, default, 0, &mut fragments);
    tracing::trace!(fragments = fragments.len(), "Rendered section tree");
    fragments
}

fn render_section(section: &Section, inherited: Role, depth: usize, out: &mut Vec<Fragment>) {
    let own = resolve(&section.heading);
    let role = if own.is_none() { inherited } else { own };

    out.push(Fragment {
        heading: section.heading.clone(),
        role,
        depth,
        opens_container: depth == 0 || role != inherited,
        body: FragmentBody::format(role, &section.content),
    });

    for child in &section.children {
        render_section(child, role, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sefer_parser::{Heading, parse_document};

    use super::*;

    fn summary(fragments: &[Fragment]) -> Vec<(&str, Role, usize, bool)> {
        fragments
            .iter()
            .map(|f| (f.heading.text.as_str(), f.role, f.depth, f.opens_container))
            .collect()
    }

    #[test]
    fn test_render_soup() {
        let root = parse_document(
            "# Soup\nGood soup.\n## Ingredients\nWater\nSalt\n\n## Steps\nBoil water.\n\nAdd salt.",
        )
        .unwrap();
        let fragments = render(&root);

        assert_eq!(
            fragments,
            vec![
                Fragment {
                    heading: Heading::new("Soup", 1),
                    role: Role::Title,
                    depth: 0,
                    opens_container: true,
                    body: FragmentBody::Description("Good soup.".to_owned()),
                },
                Fragment {
                    heading: Heading::new("Ingredients", 2),
                    role: Role::Ingredients,
                    depth: 1,
                    opens_container: true,
                    body: FragmentBody::Ingredients(vec!["Water".to_owned(), "Salt".to_owned()]),
                },
                Fragment {
                    heading: Heading::new("Steps", 2),
                    role: Role::Preparation,
                    depth: 1,
                    opens_container: true,
                    body: FragmentBody::Steps(vec![
                        "Boil water.".to_owned(),
                        "Add salt.".to_owned()
                    ]),
                },
            ]
        );
    }

    #[test]
    fn test_unrecognised_heading_inherits_root_role() {
        let root = parse_document("# Cake\n## Notes\nBest fresh.\n\nKeeps a day.").unwrap();
        let fragments = render(&root);

        assert_eq!(fragments[1].role, Role::Title);
        assert!(!fragments[1].opens_container);
        assert_eq!(
            fragments[1].body,
            FragmentBody::Description("Best fresh.\nKeeps a day.".to_owned())
        );
    }

    #[test]
    fn test_descendants_inherit_resolved_role() {
        let root = parse_document(
            "# Pie\n## Ingredients\n### Crust\nFlour\nButter\n### Filling\nApples\n## Steps\nBake.",
        )
        .unwrap();
        let fragments = render(&root);

        assert_eq!(
            summary(&fragments),
            vec![
                ("Pie", Role::Title, 0, true),
                ("Ingredients", Role::Ingredients, 1, true),
                ("Crust", Role::Ingredients, 2, false),
                ("Filling", Role::Ingredients, 2, false),
                ("Steps", Role::Preparation, 1, true),
            ]
        );
        assert_eq!(
            fragments[2].body,
            FragmentBody::Ingredients(vec!["Flour".to_owned(), "Butter".to_owned()])
        );
    }

    #[test]
    fn test_level_three_role_text_does_not_resolve() {
        let root = parse_document("# Bread\n### Ingredients\nFlour").unwrap();
        let fragments = render(&root);
        assert_eq!(fragments[1].role, Role::Title);
        assert_eq!(
            fragments[1].body,
            FragmentBody::Description("Flour".to_owned())
        );
    }

    #[test]
    fn test_return_to_root_role_after_role_section() {
        // The level 3 section sits under "Steps"; the following unrecognised
        // level 2 section goes back to the root's role.
        let root =
            parse_document("# Stew\n## Steps\nSimmer.\n### Tip\nStir often.\n## Serving\nHot.")
                .unwrap();
        assert_eq!(
            summary(&render(&root)),
            vec![
                ("Stew", Role::Title, 0, true),
                ("Steps", Role::Preparation, 1, true),
                ("Tip", Role::Preparation, 2, false),
                ("Serving", Role::Title, 1, false),
            ]
        );
    }

    #[test]
    fn test_one_fragment_per_section_in_document_order() {
        let root = parse_document("# A\n### B\n## C\n#### D\n## E").unwrap();
        let fragments = render(&root);
        let texts: Vec<_> = fragments.iter().map(|f| f.heading.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_single_section_document() {
        let root = parse_document("# Toast\nBread.").unwrap();
        assert_eq!(summary(&render(&root)), vec![("Toast", Role::Title, 0, true)]);
    }
}
