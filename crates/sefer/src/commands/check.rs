//! `sefer check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sefer_config::{CliSettings, Config};
use sefer_storage::FsStorage;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover sefer.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Recipe source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a source can't be read,
    /// or any recipe is malformed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config = ?config.config_path, "Loaded configuration");
        let settings = config.build_resolved;

        let storage = FsStorage::new(settings.source_dir).with_extension(settings.extension);
        output.info(&format!("Checking {}", storage.root().display()));
        let results = sefer_site::check(&storage)?;

        let mut malformed = 0;
        for checked in &results {
            match &checked.result {
                Ok(title) => output.detail(&format!("{}: {title}", checked.path)),
                Err(err) => {
                    malformed += 1;
                    output.error(&format!("{}: {err}", checked.path));
                }
            }
        }

        if malformed > 0 {
            return Err(CliError::Validation(format!(
                "{malformed} of {} recipe(s) are malformed",
                results.len()
            )));
        }
        output.success(&format!("All {} recipe(s) are well formed", results.len()));
        Ok(())
    }
}
