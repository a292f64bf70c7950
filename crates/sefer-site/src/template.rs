//! Embedded page templates and static assets.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::builder::PageSummary;

const RECIPE_TEMPLATE: &str = include_str!("../templates/recipe.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Stylesheet shipped with every site.
pub(crate) const STYLESHEET: &str = include_str!("../static/style.css");
/// Output path of the stylesheet, relative to the site root.
pub(crate) const STYLESHEET_PATH: &str = "static/style.css";
/// Output path of the index page, relative to the site root.
pub(crate) const INDEX_PATH: &str = "index.html";

/// Values available to `recipe.html`.
#[derive(Serialize)]
pub(crate) struct RecipePage<'a> {
    pub site_title: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Assembled recipe markup, inserted unescaped.
    pub content: &'a str,
    pub stylesheet: String,
    pub index: String,
}

/// Template environment with the page templates registered.
///
/// Templates named `*.html` are auto-escaped.
pub(crate) struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub(crate) fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("recipe.html", RECIPE_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub(crate) fn render_recipe(&self, page: &RecipePage<'_>) -> Result<String, minijinja::Error> {
        self.env.get_template("recipe.html")?.render(page)
    }

    pub(crate) fn render_index(
        &self,
        site_title: &str,
        pages: &[PageSummary],
    ) -> Result<String, minijinja::Error> {
        self.env.get_template("index.html")?.render(context! {
            site_title,
            stylesheet => STYLESHEET_PATH,
            pages,
        })
    }
}

/// Prefix that leads from `output` back to the site root.
///
/// `"soup.html"` gives `""`, `"desserts/cake.html"` gives `"../"`.
pub(crate) fn relative_root(output: &str) -> String {
    "../".repeat(output.matches('/').count())
}
