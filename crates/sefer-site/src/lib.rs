//! Static recipe site generation for sefer.
//!
//! This crate provides:
//! - [`SiteBuilder`]: renders every recipe of a source storage into an HTML
//!   page, plus an index page and a stylesheet
//! - [`check`]: parses every recipe without writing anything
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use sefer_site::{BuildConfig, SiteBuilder};
//! use sefer_storage::FsStorage;
//!
//! let source = Arc::new(FsStorage::new(PathBuf::from("recipes")));
//! let output = Arc::new(FsStorage::new(PathBuf::from("html")));
//! let report = SiteBuilder::new(source, output, BuildConfig::default()).build()?;
//! println!("{} pages, {} skipped", report.pages.len(), report.skipped.len());
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod template;

pub use builder::{
    BuildConfig, BuildReport, CheckedDocument, PageSummary, SiteBuilder, SkippedDocument, check,
    output_path,
};
pub use error::BuildError;
