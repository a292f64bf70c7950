//! Static site builder.
//!
//! Turns every recipe in a source [`Storage`] into an HTML page in an output
//! [`Storage`], then writes an index page and the stylesheet.
//!
//! Documents are independent: they are read, parsed and rendered in parallel,
//! and one malformed recipe never affects another. Writing happens afterwards,
//! in path order, so a fail-fast build that hits a malformed recipe writes
//! nothing at all.

use std::sync::Arc;

use rayon::prelude::*;
use sefer_parser::{ParseError, parse_document};
use sefer_renderer::{HtmlBackend, render_document};
use sefer_storage::{Document, Storage, StorageError};
use serde::Serialize;

use crate::error::BuildError;
use crate::template::{
    INDEX_PATH, RecipePage, STYLESHEET, STYLESHEET_PATH, Templates, relative_root,
};

/// Configuration for site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Title of the index page, also shown on every recipe page.
    pub site_title: String,
    /// Abort on the first malformed recipe instead of skipping it.
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site_title: "Cookbook".to_owned(),
            fail_fast: false,
        }
    }
}

/// A page written by the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// Source path of the recipe (e.g., "desserts/cake.md").
    pub source: String,
    /// Output path of the page (e.g., "desserts/cake.html").
    pub output: String,
    /// Recipe title: the text of its level 1 heading.
    pub title: String,
}

/// A malformed recipe that was left out of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// Source path of the recipe.
    pub path: String,
    /// Why the recipe could not be parsed.
    pub error: ParseError,
}

/// Outcome of a successful build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Written pages, in index order: by title, then output path.
    pub pages: Vec<PageSummary>,
    /// Malformed recipes, in path order.
    pub skipped: Vec<SkippedDocument>,
}

/// Result of checking one recipe without building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedDocument {
    /// Source path of the recipe.
    pub path: String,
    /// Recipe title, or the reason the recipe is malformed.
    pub result: Result<String, ParseError>,
}

/// Output path of the page for a source path: the extension becomes `.html`.
///
/// `"soup.md"` gives `"soup.html"`, `"desserts/cake.md"` gives
/// `"desserts/cake.html"`.
#[must_use]
pub fn output_path(source: &str) -> String {
    let (dir, file) = source.rsplit_once('/').unwrap_or(("", source));
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    if dir.is_empty() {
        format!("{stem}.html")
    } else {
        format!("{dir}/{stem}.html")
    }
}

struct RenderedPage {
    summary: PageSummary,
    html: String,
}

enum Outcome {
    Page(RenderedPage),
    Malformed(SkippedDocument),
}

/// Builds a static recipe site.
pub struct SiteBuilder {
    source: Arc<dyn Storage>,
    output: Arc<dyn Storage>,
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a builder reading recipes from `source` and writing pages to `output`.
    #[must_use]
    pub fn new(source: Arc<dyn Storage>, output: Arc<dyn Storage>, config: BuildConfig) -> Self {
        Self {
            source,
            output,
            config,
        }
    }

    /// Build the site.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Storage`] if a source can't be listed or read or
    /// a page can't be written, [`BuildError::Document`] for the first
    /// malformed recipe in fail-fast mode, and [`BuildError::ReservedPath`]
    /// for a recipe whose page would replace the index.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let templates = Templates::new()?;
        let documents = self.source.scan()?;
        tracing::info!(documents = documents.len(), "Building site");

        let outcomes: Vec<Result<Outcome, BuildError>> = documents
            .par_iter()
            .map(|doc| self.render_one(&templates, doc))
            .collect();

        let mut report = BuildReport::default();
        let mut pages = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome? {
                Outcome::Page(page) => pages.push(page),
                Outcome::Malformed(skipped) => {
                    if self.config.fail_fast {
                        return Err(BuildError::Document {
                            path: skipped.path,
                            source: skipped.error,
                        });
                    }
                    tracing::warn!(
                        path = %skipped.path,
                        error = %skipped.error,
                        "Skipping malformed recipe"
                    );
                    report.skipped.push(skipped);
                }
            }
        }

        for RenderedPage { summary, html } in pages {
            self.output.write(&summary.output, &html)?;
            report.pages.push(summary);
        }
        report
            .pages
            .sort_by(|a, b| (&a.title, &a.output).cmp(&(&b.title, &b.output)));

        let index = templates.render_index(&self.config.site_title, &report.pages)?;
        self.output.write(INDEX_PATH, &index)?;
        self.output.write(STYLESHEET_PATH, STYLESHEET)?;

        tracing::info!(
            pages = report.pages.len(),
            skipped = report.skipped.len(),
            "Site built"
        );
        Ok(report)
    }

    fn render_one(&self, templates: &Templates, doc: &Document) -> Result<Outcome, BuildError> {
        let output = output_path(&doc.path);
        if output == INDEX_PATH {
            return Err(BuildError::ReservedPath {
                path: doc.path.clone(),
                output,
            });
        }

        let text = self.source.read(&doc.path)?;
        let rendered = match render_document(&text) {
            Ok(rendered) => rendered,
            Err(error) => {
                return Ok(Outcome::Malformed(SkippedDocument {
                    path: doc.path.clone(),
                    error,
                }));
            }
        };

        let root = relative_root(&output);
        let description = rendered.recipe().description.replace('\n', " ");
        let content = rendered.to_html::<HtmlBackend>();
        let html = templates.render_recipe(&RecipePage {
            site_title: &self.config.site_title,
            title: rendered.title(),
            description: &description,
            content: &content,
            stylesheet: format!("{root}{STYLESHEET_PATH}"),
            index: format!("{root}{INDEX_PATH}"),
        })?;

        tracing::debug!(
            path = %doc.path,
            output = %output,
            fragments = rendered.fragments.len(),
            "Rendered recipe"
        );
        Ok(Outcome::Page(RenderedPage {
            summary: PageSummary {
                source: doc.path.clone(),
                title: rendered.title().to_owned(),
                output,
            },
            html,
        }))
    }
}

/// Parse every recipe in `storage` without rendering or writing anything.
///
/// # Errors
///
/// Returns [`StorageError`] if a source can't be listed or read. Malformed
/// recipes are reported per document, not as an error.
pub fn check(storage: &dyn Storage) -> Result<Vec<CheckedDocument>, StorageError> {
    let documents = storage.scan()?;
    documents
        .par_iter()
        .map(|doc| -> Result<CheckedDocument, StorageError> {
            let text = storage.read(&doc.path)?;
            let result = parse_document(&text).map(|root| root.heading.text);
            tracing::debug!(path = %doc.path, ok = result.is_ok(), "Checked recipe");
            Ok(CheckedDocument {
                path: doc.path.clone(),
                result,
            })
        })
        .collect()
}
