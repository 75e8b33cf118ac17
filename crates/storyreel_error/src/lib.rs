//! Error types for the storyreel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{StoryreelResult, HttpError};
//!
//! fn fetch_stories() -> StoryreelResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_stories() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod playback;
mod source;
#[cfg(feature = "tui")]
mod tui;

pub use config::ConfigError;
pub use error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use http::HttpError;
pub use json::JsonError;
pub use playback::{PlaybackError, PlaybackErrorKind, PlaybackResult};
pub use source::{SourceError, SourceErrorKind, SourceResult};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
