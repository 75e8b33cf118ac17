//! Storyreel - a terminal story player.
//!
//! Storyreel shows a ring of stories above a post feed. Opening a story plays
//! its images on a timer, advancing automatically when each image's display
//! time runs out. Taps on the left or right of the player step backward or
//! forward, crossing story boundaries, and every story opened is marked viewed.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyreel::{ImmediateLoader, NoopHost, PlaybackConfig, PlaybackEvent,
//!     PlaybackOrchestrator, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> storyreel::StoryreelResult<()> {
//!     let source = SourceConfig::default().build_source()?;
//!     let stories = source.fetch_stories().await?;
//!     let first = stories.get(0).map(|s| s.id);
//!
//!     let mut player = PlaybackOrchestrator::new(
//!         stories,
//!         PlaybackConfig::default(),
//!         NoopHost,
//!         ImmediateLoader,
//!     )?;
//!     if let Some(id) = first {
//!         player.handle(PlaybackEvent::Open(id));
//!         player.run_until_closed().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyreel_error` - Error types
//! - `storyreel_core` - Stories, positions, posts and playback timing
//! - `storyreel_playback` - Navigation, timers and the playback orchestrator
//! - `storyreel_source` - File and HTTP data sources, image probing
//! - `storyreel_tui` - Terminal host
//!
//! This crate (`storyreel`) adds layered configuration and logging setup, and
//! re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod loader;
mod telemetry;

pub use config::{DEFAULT_CONFIG, StoryreelConfig};
pub use loader::image_loader;
pub use telemetry::{default_log_file, init_console_telemetry, init_file_telemetry};

pub use storyreel_core::{
    Comment, Direction, Feed, PlaybackConfig, PlaybackConfigBuilder, Position, Post, PostId,
    Story, StoryCollection, StoryId,
};
pub use storyreel_error::{
    ConfigError, HttpError, JsonError, PlaybackError, PlaybackErrorKind, PlaybackResult,
    SourceError, SourceErrorKind, SourceResult, StoryreelError, StoryreelErrorKind,
    StoryreelResult, TuiError, TuiErrorKind, TuiResult,
};
pub use storyreel_playback::{
    EventSender, ImageLoader, ImmediateLoader, LoadRequest, LoadSignal, LoadTicket, NoopHost,
    PlaybackEvent, PlaybackHost, PlaybackOrchestrator, PlaybackSession, PlaybackTimer,
    PlayerView, ScheduledTask, Scheduler, TapZone, TaskId, ViewedTracker, advance, navigation,
};
pub use storyreel_source::{
    FileSource, HttpSource, LoadState, Location, ProbeLoader, SourceConfig, StorySource,
    load_home, validate_stories,
};
pub use storyreel_tui::{App, AppMode, TuiConfig, TuiHost, run_tui};
