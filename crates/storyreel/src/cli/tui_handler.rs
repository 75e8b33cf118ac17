//! TUI launch command handler.

use storyreel::{StoryreelConfig, StoryreelResult, image_loader, run_tui};

/// Launch the terminal user interface, optionally overriding data locations.
pub async fn launch_tui(
    config: StoryreelConfig,
    stories: Option<String>,
    posts: Option<String>,
) -> StoryreelResult<()> {
    let mut source_config = config.source().clone();
    if let Some(stories) = stories {
        source_config = source_config.with_stories(stories);
    }
    if let Some(posts) = posts {
        source_config = source_config.with_posts(posts);
    }

    tracing::info!(
        stories = %source_config.stories(),
        posts = %source_config.posts(),
        "Launching TUI"
    );

    let source = source_config.build_source()?;
    let loader = image_loader(&source_config)?;
    run_tui(source, loader, config.playback().clone(), config.tui()).await
}
