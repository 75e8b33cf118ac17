//! Image loader selection.

use std::path::{Path, PathBuf};
use storyreel_error::{HttpError, StoryreelResult};
use storyreel_playback::{ImageLoader, ImmediateLoader};
use storyreel_source::{Location, ProbeLoader, SourceConfig};
use tracing::debug;

/// Build the image loader `config` asks for.
///
/// With `image_check` enabled every image is probed before its timer starts,
/// and relative image paths resolve against the stories file's directory.
/// Otherwise images count as loaded immediately.
pub fn image_loader(config: &SourceConfig) -> StoryreelResult<Box<dyn ImageLoader>> {
    if !*config.image_check() {
        debug!("Image check disabled");
        return Ok(Box::new(ImmediateLoader));
    }

    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .build()
        .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

    let base = match Location::parse(config.stories()) {
        Location::Path(path) => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Location::Url(_) => PathBuf::from("."),
    };
    debug!(base = %base.display(), "Probing images before playback");
    Ok(Box::new(ProbeLoader::new(client, base)))
}
