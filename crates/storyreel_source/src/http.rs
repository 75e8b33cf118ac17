//! HTTP backend with retry on transient failures.

use crate::{StorySource, decode, validate_stories};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use storyreel_core::{Feed, StoryCollection};
use storyreel_error::{SourceError, SourceErrorKind, SourceResult};
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, error, instrument, warn};

const INITIAL_BACKOFF_MS: u64 = 250;
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// Fetches stories and posts with HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    stories: String,
    posts: String,
    retries: usize,
}

impl HttpSource {
    /// Create a source for the two URLs.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(
        stories: impl Into<String>,
        posts: impl Into<String>,
        timeout: Duration,
        retries: usize,
    ) -> SourceResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            SourceError::new(SourceErrorKind::Request(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self {
            client,
            stories: stories.into(),
            posts: posts.into(),
            retries,
        })
    }

    /// Issue one GET, mapping failures to source errors.
    async fn get_once(&self, url: &str, what: &str) -> SourceResult<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            SourceError::new(SourceErrorKind::Request(format!("{}: {}", url, e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, url, "Fetch returned error status");
            return Err(SourceError::new(SourceErrorKind::Status {
                message: format!("Failed to fetch {}", what),
                status: status.as_u16(),
            }));
        }

        let bytes = response.bytes().await.map_err(|e| {
            SourceError::new(SourceErrorKind::Request(format!("{}: {}", url, e)))
        })?;
        Ok(bytes.to_vec())
    }

    /// GET with exponential backoff on retryable failures.
    #[instrument(skip(self))]
    async fn get(&self, url: &str, what: &str) -> SourceResult<Vec<u8>> {
        let retry_strategy = ExponentialBackoff::from_millis(INITIAL_BACKOFF_MS)
            .factor(2)
            .max_delay(MAX_BACKOFF)
            .map(jitter)
            .take(self.retries);

        let this = self;
        Retry::spawn(retry_strategy, move || async move {
            match this.get_once(url, what).await {
                Ok(bytes) => Ok(bytes),
                Err(e) if e.kind.is_retryable() => {
                    warn!(error = %e, "Transient fetch failure, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await
    }
}

#[async_trait]
impl StorySource for HttpSource {
    async fn fetch_stories(&self) -> SourceResult<StoryCollection> {
        let bytes = self.get(&self.stories, "stories").await?;
        let stories: StoryCollection = decode(&bytes, &self.stories)?;
        validate_stories(&stories)?;
        debug!(count = stories.len(), "Fetched stories");
        Ok(stories)
    }

    async fn fetch_posts(&self) -> SourceResult<Feed> {
        let bytes = self.get(&self.posts, "posts").await?;
        let feed: Feed = decode(&bytes, &self.posts)?;
        debug!(count = feed.len(), "Fetched posts");
        Ok(feed)
    }
}
