//! Story listing command handler.

use super::commands::OutputFormat;
use storyreel::{JsonError, StoryreelConfig, StoryreelResult};

/// List the stories the configured source provides.
pub async fn list_stories(config: &StoryreelConfig, format: OutputFormat) -> StoryreelResult<()> {
    let source = config.source().build_source()?;
    let stories = source.fetch_stories().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stories)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:<8} {:<20} {:>6}  {}", "ID", "USER", "IMAGES", "VIEWED");
            println!("{:-<48}", "");
            for story in &stories {
                println!(
                    "{:<8} {:<20} {:>6}  {}",
                    story.id,
                    story.username,
                    story.image_count(),
                    if story.viewed { "yes" } else { "no" }
                );
            }
            println!("Total: {} stories, {} unviewed", stories.len(), stories.unviewed_count());
        }
    }

    Ok(())
}
