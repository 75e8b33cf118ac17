//! Core data types for the storyreel story player.
//!
//! This crate provides the data model shared by the playback engine, the data
//! sources and the terminal host: stories and their ordered collection, the
//! playback position, feed posts, and playback timing configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod config;
mod post;
mod position;
mod story;

pub use collection::StoryCollection;
pub use config::{PlaybackConfig, PlaybackConfigBuilder};
pub use post::{Comment, Feed, Post, PostId};
pub use position::{Direction, Position};
pub use story::{Story, StoryId};
