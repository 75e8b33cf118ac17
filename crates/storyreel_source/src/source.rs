//! The data source trait and collection validation.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use storyreel_core::{Feed, StoryCollection};
use storyreel_error::{SourceError, SourceErrorKind, SourceResult};

/// Provider of the story collection and the post feed.
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Fetch and validate the story collection.
    async fn fetch_stories(&self) -> SourceResult<StoryCollection>;

    /// Fetch the post feed.
    async fn fetch_posts(&self) -> SourceResult<Feed>;
}

/// A data location: remote URL or local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// `http://` or `https://` URL
    Url(String),
    /// Filesystem path
    Path(PathBuf),
}

impl Location {
    /// Classify a location string by its scheme.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }
}

/// Reject collections the playback engine cannot address unambiguously.
///
/// Story ids must be unique, since `open` locates a story by id.
///
/// # Errors
///
/// Returns `InvalidData` naming the first duplicated id.
pub fn validate_stories(stories: &StoryCollection) -> SourceResult<()> {
    let mut seen = HashSet::new();
    for story in stories {
        if !seen.insert(story.id) {
            return Err(SourceError::new(SourceErrorKind::InvalidData(format!(
                "duplicate story id {}",
                story.id
            ))));
        }
        if story.is_empty() {
            tracing::warn!(story_id = %story.id, "Story has no images and will be skipped");
        }
    }
    Ok(())
}

/// Decode a JSON payload fetched from `location`.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    bytes: &[u8],
    location: &str,
) -> SourceResult<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::error!(location, error = %e, "Failed to decode payload");
        SourceError::new(SourceErrorKind::Decode(format!("{}: {}", location, e)))
    })
}
