//! `sefer build` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sefer_config::{CliSettings, Config};
use sefer_site::{BuildConfig, SiteBuilder};
use sefer_storage::FsStorage;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover sefer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipe source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Abort on the first malformed recipe instead of skipping it.
    #[arg(long)]
    fail_fast: bool,

    /// Enable verbose output (per-recipe progress and build summary logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source_dir: self.source_dir.clone(),
            output_dir: self.output_dir.clone(),
            fail_fast: self.fail_fast.then_some(true),
        }
    }

    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the build aborts.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        tracing::debug!(config = ?config.config_path, "Loaded configuration");
        let settings = config.build_resolved;

        let source = Arc::new(
            FsStorage::new(settings.source_dir).with_extension(settings.extension),
        );
        let target = Arc::new(FsStorage::new(settings.output_dir));
        output.info(&format!("Source: {}", source.root().display()));
        output.info(&format!("Output: {}", target.root().display()));
        let build_config = BuildConfig {
            site_title: settings.site_title,
            fail_fast: settings.fail_fast,
        };

        let output_dir = target.root().to_path_buf();
        let report = SiteBuilder::new(source, target, build_config).build()?;

        for skipped in &report.skipped {
            output.warning(&format!("Skipped {}: {}", skipped.path, skipped.error));
        }
        output.success(&format!(
            "Built {} recipe(s) to {}",
            report.pages.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
