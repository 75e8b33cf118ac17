//! Terminal story player.
//!
//! Shows the story ring and post feed, and plays stories full-screen with
//! segmented progress bars. Built with ratatui for rendering; the playback
//! engine reports committed navigation through [`TuiHost`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod config;
mod events;
mod host;
pub mod input;
mod runner;
pub mod ui;

pub use app::{App, AppMode, COMMENT_PREVIEW};
pub use config::TuiConfig;
pub use events::{Event, EventHandler};
pub use host::{Player, TuiHost};
pub use runner::run_tui;
pub use storyreel_error::{TuiError, TuiErrorKind, TuiResult};
