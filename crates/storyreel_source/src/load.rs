//! Home screen load state.

use crate::StorySource;
use storyreel_core::{Feed, StoryCollection};
use tracing::{info, instrument, warn};

/// What the host shows while the data source is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch failed; the message is shown instead of the player
    Failed(String),
    /// Both stories and posts are available
    Ready {
        /// Validated story collection
        stories: StoryCollection,
        /// Post feed
        feed: Feed,
    },
}

impl LoadState {
    /// Whether data is ready.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch stories and posts concurrently.
///
/// When both fail, the stories failure is reported.
#[instrument(skip(source))]
pub async fn load_home(source: &dyn StorySource) -> LoadState {
    let (stories, feed) = tokio::join!(source.fetch_stories(), source.fetch_posts());
    match (stories, feed) {
        (Ok(stories), Ok(feed)) => {
            info!(stories = stories.len(), posts = feed.len(), "Home data ready");
            LoadState::Ready { stories, feed }
        }
        (Err(e), _) | (Ok(_), Err(e)) => {
            warn!(error = %e, "Home data failed to load");
            LoadState::Failed(e.user_message())
        }
    }
}
