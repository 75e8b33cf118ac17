//! Playback position and navigation direction.

use serde::{Deserialize, Serialize};

/// What is currently displayed, or nothing.
///
/// An `Open` position produced by the navigation engine always satisfies
/// `story < collection.len()` and `image < collection[story].images.len()`.
///
/// # Examples
///
/// ```
/// use storyreel_core::Position;
///
/// let position = Position::open(0, 1);
/// assert_eq!(position.story_index(), Some(0));
/// assert_eq!(position.image_index(), Some(1));
/// assert!(!Position::Closed.is_open());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Position {
    /// No story is being displayed
    #[default]
    Closed,
    /// A story image is being displayed
    Open {
        /// Index into the story collection
        story: usize,
        /// Index into the story's images
        image: usize,
    },
}

impl Position {
    /// Construct an open position.
    pub const fn open(story: usize, image: usize) -> Self {
        Self::Open { story, image }
    }

    /// Whether a story is being displayed.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Story index, if open.
    pub fn story_index(&self) -> Option<usize> {
        match self {
            Self::Open { story, .. } => Some(*story),
            Self::Closed => None,
        }
    }

    /// Image index, if open.
    pub fn image_index(&self) -> Option<usize> {
        match self {
            Self::Open { image, .. } => Some(*image),
            Self::Closed => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open { story, image } => write!(f, "({}, {})", story, image),
        }
    }
}

/// Navigation direction through the story sequence.
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
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Toward the next image
    Forward,
    /// Toward the previous image
    Backward,
}
