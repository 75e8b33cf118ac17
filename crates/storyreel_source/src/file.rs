//! Local JSON file backend.

use crate::{StorySource, decode, validate_stories};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use storyreel_core::{Feed, StoryCollection};
use storyreel_error::{SourceError, SourceErrorKind, SourceResult};
use tracing::{debug, instrument};

/// Reads stories and posts from JSON files.
#[derive(Debug, Clone)]
pub struct FileSource {
    stories: PathBuf,
    posts: PathBuf,
}

impl FileSource {
    /// Create a source reading the two given files.
    pub fn new(stories: impl Into<PathBuf>, posts: impl Into<PathBuf>) -> Self {
        Self {
            stories: stories.into(),
            posts: posts.into(),
        }
    }
}

async fn read(path: &Path) -> SourceResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        let location = path.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::new(SourceErrorKind::NotFound(location))
        } else {
            SourceError::new(SourceErrorKind::FileRead(format!("{}: {}", location, e)))
        }
    })
}

#[async_trait]
impl StorySource for FileSource {
    #[instrument(skip(self), fields(path = %self.stories.display()))]
    async fn fetch_stories(&self) -> SourceResult<StoryCollection> {
        let bytes = read(&self.stories).await?;
        let stories: StoryCollection = decode(&bytes, &self.stories.display().to_string())?;
        validate_stories(&stories)?;
        debug!(count = stories.len(), "Loaded stories");
        Ok(stories)
    }

    #[instrument(skip(self), fields(path = %self.posts.display()))]
    async fn fetch_posts(&self) -> SourceResult<Feed> {
        let bytes = read(&self.posts).await?;
        let feed: Feed = decode(&bytes, &self.posts.display().to_string())?;
        debug!(count = feed.len(), "Loaded posts");
        Ok(feed)
    }
}
