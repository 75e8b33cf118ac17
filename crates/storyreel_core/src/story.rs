//! Story types.

use serde::{Deserialize, Serialize};

/// Identity of a story as assigned by the data source.
///
/// # Examples
///
/// ```
/// use storyreel_core::StoryId;
///
/// let id = StoryId::from(7);
/// assert_eq!(format!("{}", id), "7");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct StoryId(pub u64);

/// A named, ordered sequence of images with a viewed flag.
///
/// Matches the JSON shape `{id, username, avatar, images: string[], viewed}`.
///
/// # Examples
///
/// ```
/// use storyreel_core::Story;
///
/// let story: Story = serde_json::from_str(
///     r#"{"id": 1, "username": "ana", "avatar": "a.png", "images": ["x.jpg"]}"#,
/// ).unwrap();
/// assert!(!story.viewed);
/// assert_eq!(story.image_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story identity
    pub id: StoryId,
    /// Display name of the author
    pub username: String,
    /// Avatar image reference
    pub avatar: String,
    /// Ordered image references
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the story has been opened at least once
    #[serde(default)]
    pub viewed: bool,
}

impl Story {
    /// Number of images in the story.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Whether the story has nothing to display.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the last image, `None` for an empty story.
    pub fn last_image_index(&self) -> Option<usize> {
        self.images.len().checked_sub(1)
    }
}
