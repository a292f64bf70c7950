//! Configuration management for sefer.
//!
//! Parses `sefer.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `build.source_dir`
//! - `build.output_dir`
//! - `build.site_title`
//! - `build.extension`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override recipe source directory.
    pub source_dir: Option<PathBuf>,
    /// Override HTML output directory.
    pub output_dir: Option<PathBuf>,
    /// Override fail-fast flag.
    pub fail_fast: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sefer.toml";

const DEFAULT_SOURCE_DIR: &str = "recipes";
const DEFAULT_OUTPUT_DIR: &str = "html";
const DEFAULT_SITE_TITLE: &str = "Cookbook";
const DEFAULT_EXTENSION: &str = "md";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Build configuration (paths are relative strings from TOML).
    #[serde(default)]
    build: BuildConfigRaw,

    /// Resolved build settings (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildSettings,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    site_title: Option<String>,
    fail_fast: Option<bool>,
    extension: Option<String>,
}

/// Resolved build settings with absolute paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSettings {
    /// Directory scanned for recipe sources.
    pub source_dir: PathBuf,
    /// Directory the HTML site is written to.
    pub output_dir: PathBuf,
    /// Title of the index page.
    pub site_title: String,
    /// Abort on the first malformed recipe instead of skipping it.
    pub fail_fast: bool,
    /// Extension of source files, without the leading dot.
    pub extension: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`build.source_dir`").
        field: String,
        /// Error message (e.g., "${`RECIPES`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sefer.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The merged result
    /// is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.build_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(fail_fast) = settings.fail_fast {
            self.build_resolved.fail_fast = fail_fast;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            build: BuildConfigRaw::default(),
            build_resolved: BuildSettings::default(),
            config_path: None,
        };
        config.resolve(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let build = &self.build_resolved;
        require_non_empty(&build.site_title, "build.site_title")?;
        require_non_empty(&build.extension, "build.extension")?;

        if build.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "build.extension must not start with a dot".to_owned(),
            ));
        }
        if build.source_dir == build.output_dir {
            return Err(ConfigError::Validation(format!(
                "build.output_dir must differ from build.source_dir ({})",
                build.source_dir.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let build = &mut self.build;
        let fields = [
            (&mut build.source_dir, "build.source_dir"),
            (&mut build.output_dir, "build.output_dir"),
            (&mut build.site_title, "build.site_title"),
            (&mut build.extension, "build.extension"),
        ];
        for (value, field) in fields {
            if let Some(raw) = value {
                *raw = expand::expand_env(raw, field)?;
            }
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill defaults.
    fn resolve(&mut self, config_dir: &Path) {
        let raw = &self.build;
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.build_resolved = BuildSettings {
            source_dir: resolve(raw.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
            output_dir: resolve(raw.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            site_title: raw
                .site_title
                .clone()
                .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned()),
            fail_fast: raw.fail_fast.unwrap_or(false),
            extension: raw
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_owned()),
        };
    }
}
