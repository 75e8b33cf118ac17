//! Snapshot of the player for rendering.

use storyreel_core::{Direction, Position, StoryId};

/// What the player shows at one instant.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PlayerView {
    /// Current position
    position: Position,
    /// Story being played
    story_id: StoryId,
    /// Story author
    username: String,
    /// Author avatar reference
    avatar: String,
    /// Displayed image reference
    image: String,
    /// Index of the displayed image
    image_index: usize,
    /// Images in the story
    image_count: usize,
    /// Progress through the displayed image, 0..=100
    progress: u8,
    /// Whether the image is still loading
    loading: bool,
    /// Pending slide direction
    slide: Option<Direction>,
    /// Fill of each image's progress segment, 0..=100
    segments: Vec<u8>,
}

impl PlayerView {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        position: Position,
        story_id: StoryId,
        username: String,
        avatar: String,
        image: String,
        image_count: usize,
        progress: u8,
        loading: bool,
        slide: Option<Direction>,
    ) -> Self {
        let image_index = position.image_index().unwrap_or_default();
        let segments = (0..image_count)
            .map(|index| match index.cmp(&image_index) {
                std::cmp::Ordering::Less => 100,
                std::cmp::Ordering::Equal => progress,
                std::cmp::Ordering::Greater => 0,
            })
            .collect();
        Self {
            position,
            story_id,
            username,
            avatar,
            image,
            image_index,
            image_count,
            progress,
            loading,
            slide,
            segments,
        }
    }
}
