//! Layered application configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from storyreel.toml)
//! - `~/.config/storyreel/storyreel.toml`
//! - `./storyreel.toml`
//! - An explicit file given on the command line
//! - `STORYREEL_<SECTION>__<KEY>` environment variables

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyreel_core::PlaybackConfig;
use storyreel_error::{ConfigError, StoryreelError, StoryreelResult};
use storyreel_source::SourceConfig;
use storyreel_tui::TuiConfig;
use tracing::debug;

/// Bundled default configuration.
pub const DEFAULT_CONFIG: &str = include_str!("../../../storyreel.toml");

/// Complete storyreel configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct StoryreelConfig {
    /// Where stories and posts come from
    #[serde(default)]
    source: SourceConfig,
    /// Playback timing
    #[serde(default)]
    playback: PlaybackConfig,
    /// Terminal host settings
    #[serde(default)]
    tui: TuiConfig,
}

impl StoryreelConfig {
    /// Load configuration with precedence: env > explicit file > current dir >
    /// home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed, when `explicit` does not exist, or
    /// when the playback timing is invalid.
    pub fn load(explicit: Option<&Path>) -> StoryreelResult<Self> {
        debug!(?explicit, "Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyreel/storyreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyreel").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("STORYREEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .build()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse a single TOML document over built-in defaults.
    pub fn from_toml(toml: &str) -> StoryreelResult<Self> {
        let config: Self = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize::<Self>)
            .map_err(|e| {
                StoryreelError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> StoryreelResult<()> {
        self.playback.validate()?;
        Ok(())
    }

    /// Replace the source section.
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }
}
