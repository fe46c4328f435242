//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Bundled defaults (`gleaner.toml` shipped with the crate)
//! 2. `~/.config/gleaner/gleaner.toml`
//! 3. `./gleaner.toml`
//! 4. An explicit file passed by the caller
//!
//! Secrets never live here; the token and guild id come from the environment.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use gleaner_error::{ConfigError, GleanerError, GleanerResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../gleaner.toml");

/// History pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PaginationConfig {
    /// Messages requested per page (1..=100)
    #[serde(default = "default_batch_size")]
    batch_size: u8,
}

fn default_batch_size() -> u8 {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

/// Report delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OutputConfig {
    /// Upload oversized reports as a file attachment
    #[serde(default)]
    file_output: bool,
    /// Character count above which a report is oversized
    #[serde(default = "default_inline_limit")]
    inline_limit: usize,
    /// Directory for the transient report file
    #[serde(default = "default_staging_dir")]
    staging_dir: PathBuf,
}

fn default_inline_limit() -> usize {
    2000
}

fn default_staging_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_output: false,
            inline_limit: default_inline_limit(),
            staging_dir: default_staging_dir(),
        }
    }
}

/// Top-level Gleaner configuration.
///
/// # Example
///
/// ```toml
/// [pagination]
/// batch_size = 100
///
/// [output]
/// file_output = true
/// inline_limit = 2000
/// staging_dir = "/tmp/gleaner"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GleanerConfig {
    /// Pagination settings
    #[serde(default)]
    pagination: PaginationConfig,
    /// Output settings
    #[serde(default)]
    output: OutputConfig,
}

impl GleanerConfig {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns error if a present file cannot be parsed or a value is out of range.
    pub fn load() -> GleanerResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration from the default locations plus an optional
    /// explicit file with the highest precedence.
    ///
    /// # Errors
    ///
    /// Returns error if the explicit file is missing, any file cannot be
    /// parsed, or a value is out of range.
    #[instrument]
    pub fn load_with(path: Option<&Path>) -> GleanerResult<Self> {
        debug!("Loading configuration: explicit > current dir > home dir > bundled defaults");

        let mut builder = Config::builder().add_source(File::from_str(
            DEFAULT_CONFIG,
            FileFormat::Toml,
        ));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/gleaner/gleaner.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("gleaner").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let loaded: Self = builder
            .build()
            .map_err(|e| {
                GleanerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                GleanerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration from a single TOML file, ignoring other sources.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or a value is out of range.
    pub fn from_file(path: impl AsRef<Path>) -> GleanerResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GleanerError::from(ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        let loaded: Self = toml_from_str(&content)?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns error if `batch_size` is outside `1..=100` or `inline_limit` is zero.
    pub fn validate(&self) -> GleanerResult<()> {
        let batch_size = self.pagination.batch_size;
        if !(1..=100).contains(&batch_size) {
            return Err(ConfigError::new(format!(
                "pagination.batch_size must be between 1 and 100, got {}",
                batch_size
            ))
            .into());
        }
        if self.output.inline_limit == 0 {
            return Err(ConfigError::new("output.inline_limit must be greater than 0").into());
        }
        Ok(())
    }

    /// Turn on file output, keeping the other settings.
    pub fn with_file_output(mut self, enabled: bool) -> Self {
        self.output.file_output = enabled;
        self
    }
}

fn toml_from_str(content: &str) -> GleanerResult<GleanerConfig> {
    Config::builder()
        .add_source(File::from_str(content, FileFormat::Toml))
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| {
            GleanerError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
