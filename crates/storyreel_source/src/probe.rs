//! Image loader that confirms each image exists before playback starts.

use crate::Location;
use reqwest::Client;
use std::path::{Path, PathBuf};
use storyreel_playback::{ImageLoader, LoadRequest};
use tracing::{debug, warn};

/// Probes image references on a spawned task and signals loaded on success.
///
/// URLs must answer a GET with a success status; paths must exist, relative
/// ones resolved against the base directory. An image that fails the probe is
/// never signalled, so its timer stays inactive.
#[derive(Debug, Clone)]
pub struct ProbeLoader {
    client: Client,
    base: PathBuf,
}

impl ProbeLoader {
    /// Create a loader resolving relative paths against `base`.
    pub fn new(client: Client, base: impl Into<PathBuf>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    /// Resolve an image path against the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

async fn probe(client: &Client, location: &Location) -> Result<(), String> {
    match location {
        Location::Url(url) => {
            let response = client.get(url).send().await.map_err(|e| e.to_string())?;
            if response.status().is_success() {
                Ok(())
            } else {
                Err(format!("status {}", response.status()))
            }
        }
        Location::Path(path) => match tokio::fs::try_exists(path).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(format!("{} does not exist", path.display())),
            Err(e) => Err(e.to_string()),
        },
    }
}

impl ImageLoader for ProbeLoader {
    fn load(&mut self, request: LoadRequest) {
        let location = match Location::parse(request.image()) {
            Location::Path(path) => Location::Path(self.resolve(&path)),
            url => url,
        };
        let client = self.client.clone();
        let image = request.image().clone();
        let signal = request.into_signal();
        tokio::spawn(async move {
            match probe(&client, &location).await {
                Ok(()) => {
                    debug!(%image, ticket = %signal.ticket(), "Image probe succeeded");
                    signal.loaded();
                }
                Err(reason) => warn!(%image, %reason, "Image failed to load, playback stalled"),
            }
        });
    }
}
