//! Data sources for storyreel.
//!
//! A [`StorySource`] provides the story collection and the post feed. The HTTP
//! backend retries transient failures with exponential backoff; the file
//! backend reads local JSON. [`load_home`] turns either into a [`LoadState`]
//! for the host, collapsing failures into one descriptive message.
//!
//! [`ProbeLoader`] is an [`ImageLoader`](storyreel_playback::ImageLoader) that
//! only reports an image loaded after confirming it can be fetched.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod file;
mod http;
mod load;
mod probe;
mod source;

pub use config::SourceConfig;
pub use file::FileSource;
pub use http::HttpSource;
pub use load::{LoadState, load_home};
pub use probe::ProbeLoader;
pub(crate) use source::decode;
pub use source::{Location, StorySource, validate_stories};
