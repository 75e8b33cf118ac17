//! Playback timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyreel_error::ConfigError;

/// Timing parameters for story playback.
///
/// # Examples
///
/// ```
/// use storyreel_core::PlaybackConfig;
///
/// let quick = PlaybackConfig::builder()
///     .image_duration_ms(2_000)
///     .tick_interval_ms(50)
///     .build();
/// assert!(quick.validate().is_ok());
///
/// let default = PlaybackConfig::default();
/// assert_eq!(*default.image_duration_ms(), 5_000);
/// assert_eq!(*default.transition_delay_ms(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// How long each image is displayed before auto-advance.
    #[serde(default = "default_image_duration_ms")]
    image_duration_ms: u64,

    /// Interval between progress ticks.
    #[serde(default = "default_tick_interval_ms")]
    tick_interval_ms: u64,

    /// Delay between starting a slide transition and committing it.
    #[serde(default = "default_transition_delay_ms")]
    transition_delay_ms: u64,
}

fn default_image_duration_ms() -> u64 {
    5_000
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_transition_delay_ms() -> u64 {
    150
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            image_duration_ms: default_image_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            transition_delay_ms: default_transition_delay_ms(),
        }
    }
}

impl PlaybackConfig {
    /// Creates a new playback config builder.
    pub fn builder() -> PlaybackConfigBuilder {
        PlaybackConfigBuilder::default()
    }

    /// Validates that the timings can drive playback.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or tick interval is zero, or the tick
    /// interval exceeds the duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_duration_ms == 0 {
            return Err(ConfigError::new("image_duration_ms must be greater than zero"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::new("tick_interval_ms must be greater than zero"));
        }
        if self.tick_interval_ms > self.image_duration_ms {
            return Err(ConfigError::new(format!(
                "tick_interval_ms ({}) must not exceed image_duration_ms ({})",
                self.tick_interval_ms, self.image_duration_ms
            )));
        }
        Ok(())
    }

    /// Display duration per image.
    pub fn image_duration(&self) -> Duration {
        Duration::from_millis(self.image_duration_ms)
    }

    /// Progress tick interval.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Slide transition delay.
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }

    /// Progress percentage after `elapsed` of display time, capped at 100.
    pub fn progress_at(&self, elapsed: Duration) -> u8 {
        let total = self.image_duration_ms.max(1) as u128;
        let percent = (elapsed.as_millis() * 100 / total).min(100);
        percent as u8
    }
}

/// Builder for `PlaybackConfig`.
#[derive(Debug, Default)]
pub struct PlaybackConfigBuilder {
    image_duration_ms: Option<u64>,
    tick_interval_ms: Option<u64>,
    transition_delay_ms: Option<u64>,
}

impl PlaybackConfigBuilder {
    /// Sets the display duration per image.
    pub fn image_duration_ms(mut self, value: u64) -> Self {
        self.image_duration_ms = Some(value);
        self
    }

    /// Sets the progress tick interval.
    pub fn tick_interval_ms(mut self, value: u64) -> Self {
        self.tick_interval_ms = Some(value);
        self
    }

    /// Sets the slide transition delay.
    pub fn transition_delay_ms(mut self, value: u64) -> Self {
        self.transition_delay_ms = Some(value);
        self
    }

    /// Builds the `PlaybackConfig`.
    pub fn build(self) -> PlaybackConfig {
        PlaybackConfig {
            image_duration_ms: self
                .image_duration_ms
                .unwrap_or_else(default_image_duration_ms),
            tick_interval_ms: self
                .tick_interval_ms
                .unwrap_or_else(default_tick_interval_ms),
            transition_delay_ms: self
                .transition_delay_ms
                .unwrap_or_else(default_transition_delay_ms),
        }
    }
}
