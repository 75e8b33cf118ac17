//! Headless playback command handler.

use std::time::Duration;
use storyreel::{
    ImageLoader, PlaybackEvent, PlaybackHost, PlaybackOrchestrator, Position, StoryId,
    StoryreelConfig, StoryreelResult, image_loader,
};
use tracing::warn;

/// Slack on top of the fetch timeout before an unloaded image counts as stalled.
const STALL_GRACE: Duration = Duration::from_secs(1);

/// Prints each committed transition to stdout.
#[derive(Debug, Default)]
struct PrintingHost {
    transitions: usize,
}

impl PlaybackHost for PrintingHost {
    fn on_close(&mut self) {
        println!("closed after {} transitions", self.transitions);
    }

    fn on_next(&mut self, position: Position) {
        self.transitions += 1;
        println!("next     {}", position);
    }

    fn on_previous(&mut self, position: Position) {
        self.transitions += 1;
        println!("previous {}", position);
    }
}

/// Open a story and let the timer play it through to the end of the sequence.
pub async fn run_autoplay(config: &StoryreelConfig, story: Option<u64>) -> StoryreelResult<()> {
    let source = config.source().build_source()?;
    let stories = source.fetch_stories().await?;

    let Some(id) = story
        .map(StoryId)
        .or_else(|| stories.get(0).map(|s| s.id))
    else {
        println!("No stories to play");
        return Ok(());
    };

    let loader = image_loader(config.source())?;
    let mut player = PlaybackOrchestrator::new(
        stories,
        config.playback().clone(),
        PrintingHost::default(),
        loader,
    )?;

    tracing::info!(story_id = %id, "Starting autoplay");
    player.handle(PlaybackEvent::Open(id));
    if !player.is_open() {
        println!("Story {} has nothing to play", id);
        return Ok(());
    }
    println!("open     {}", player.position());
    play_to_end(&mut player, config.source().timeout() + STALL_GRACE).await?;

    for story in player.stories() {
        println!(
            "{:<8} {:<20} {}",
            story.id,
            story.username,
            if story.viewed { "viewed" } else { "unviewed" }
        );
    }
    Ok(())
}

/// Process events until the session closes.
///
/// A running timer ticks continuously, so a gap of `stall_after` with no event
/// means the current image never loaded. The stalled image is reported and
/// the player closed. Returns whether playback stalled.
async fn play_to_end<H, L>(
    player: &mut PlaybackOrchestrator<H, L>,
    stall_after: Duration,
) -> StoryreelResult<bool>
where
    H: PlaybackHost,
    L: ImageLoader,
{
    while player.is_open() {
        match tokio::time::timeout(stall_after, player.step()).await {
            Ok(step) => {
                step?;
            }
            Err(_) => {
                let image = player
                    .view()
                    .map(|view| view.image().clone())
                    .unwrap_or_default();
                warn!(%image, ?stall_after, "Image did not load, stopping autoplay");
                println!("stalled  {} did not load within {:?}", image, stall_after);
                player.handle(PlaybackEvent::Close);
                return Ok(true);
            }
        }
    }
    Ok(false)
}
