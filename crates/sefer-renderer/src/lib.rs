//! Role-driven rendering of recipe section trees.
//!
//! A parsed [`Section`] tree is walked in pre-order. Each section gets a
//! [`Role`]: its own, when its heading is one of the recognised level 2
//! headings, or the one inherited from its nearest resolved ancestor. The
//! role decides how the section's lines are shaped into a [`Fragment`]:
//!
//! - [`Role::Title`]: description paragraph (the root default)
//! - [`Role::Ingredients`]: one list item per non-empty line
//! - [`Role::Preparation`]: one step per block between empty lines
//!
//! Markup is produced by a [`RenderBackend`]; [`assemble`] wraps each role
//! region in a container and keeps the nesting balanced.
//!
//! # Example
//!
//! ```
//! use sefer_renderer::{HtmlBackend, render_document};
//!
//! let doc = render_document("# Soup\n## Ingredients\nWater\nSalt")?;
//! assert_eq!(doc.recipe().ingredients, vec!["Water", "Salt"]);
//! let html = doc.to_html::<HtmlBackend>();
//! assert!(html.starts_with(r#"<div class="recipe-title">"#));
//! # Ok::<(), sefer_parser::ParseError>(())
//! ```

mod assemble;
mod backend;
mod fragment;
mod html;
mod recipe;
mod renderer;
mod role;

pub use assemble::assemble;
pub use backend::RenderBackend;
pub use fragment::{Fragment, FragmentBody, describe, list_items, split_steps};
pub use html::{HtmlBackend, escape_html};
pub use recipe::Recipe;
pub use renderer::render;
pub use role::{ROLE_LEVEL, Role, resolve};

use sefer_parser::{ParseError, Section, parse_document};

/// A document rendered into fragments, ready for markup assembly.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    /// Fragments in pre-order; the first one is the root.
    pub fragments: Vec<Fragment>,
}

impl RenderedDocument {
    /// Render an already parsed section tree.
    #[must_use]
    pub fn from_tree(root: &Section) -> Self {
        Self {
            fragments: render(root),
        }
    }

    /// Title of the document: the root heading text.
    #[must_use]
    pub fn title(&self) -> &str {
        self.fragments
            .first()
            .map_or("", |root| root.heading.text.as_str())
    }

    /// Flat recipe summary.
    #[must_use]
    pub fn recipe(&self) -> Recipe {
        Recipe::from_fragments(&self.fragments)
    }

    /// Assemble the fragments with the given backend.
    #[must_use]
    pub fn to_html<B: RenderBackend>(&self) -> String {
        assemble::<B>(&self.fragments)
    }
}

/// Parse and render a document in one step.
pub fn render_document(text: &str) -> Result<RenderedDocument, ParseError> {
    let root = parse_document(text)?;
    Ok(RenderedDocument::from_tree(&root))
}
