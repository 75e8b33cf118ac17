//! Data source configuration.

use crate::{FileSource, HttpSource, Location, StorySource};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storyreel_error::{SourceError, SourceErrorKind, SourceResult};

fn default_stories() -> String {
    "data/stories.json".to_string()
}

fn default_posts() -> String {
    "data/posts.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retries() -> usize {
    2
}

fn default_image_check() -> bool {
    true
}

/// Where stories and posts come from and how to fetch them.
///
/// Locations starting with `http://` or `https://` are fetched over HTTP,
/// anything else is read as a local file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Stories JSON location
    #[serde(default = "default_stories")]
    stories: String,
    /// Posts JSON location
    #[serde(default = "default_posts")]
    posts: String,
    /// Per-request timeout for HTTP fetches
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    /// Retries after a transient HTTP failure
    #[serde(default = "default_retries")]
    retries: usize,
    /// Probe each image before signalling it loaded
    #[serde(default = "default_image_check")]
    image_check: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            stories: default_stories(),
            posts: default_posts(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
            image_check: default_image_check(),
        }
    }
}

impl SourceConfig {
    /// Replace the stories location.
    pub fn with_stories(mut self, stories: impl Into<String>) -> Self {
        self.stories = stories.into();
        self
    }

    /// Replace the posts location.
    pub fn with_posts(mut self, posts: impl Into<String>) -> Self {
        self.posts = posts.into();
        self
    }

    /// Replace the image probe flag.
    pub fn with_image_check(mut self, image_check: bool) -> Self {
        self.image_check = image_check;
        self
    }

    /// HTTP request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the source these locations describe.
    ///
    /// # Errors
    ///
    /// Fails when the two locations use different schemes, or when the HTTP
    /// client cannot be constructed.
    pub fn build_source(&self) -> SourceResult<Box<dyn StorySource>> {
        match (Location::parse(&self.stories), Location::parse(&self.posts)) {
            (Location::Url(stories), Location::Url(posts)) => Ok(Box::new(HttpSource::new(
                stories,
                posts,
                self.timeout(),
                self.retries,
            )?)),
            (Location::Path(stories), Location::Path(posts)) => {
                Ok(Box::new(FileSource::new(stories, posts)))
            }
            _ => Err(SourceError::new(SourceErrorKind::InvalidData(format!(
                "stories ({}) and posts ({}) must both be URLs or both be paths",
                self.stories, self.posts
            )))),
        }
    }
}
