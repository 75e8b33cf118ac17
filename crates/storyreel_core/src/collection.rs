//! Ordered story collection.

use crate::{Position, Story, StoryId};
use serde::{Deserialize, Serialize};

/// Ordered sequence of stories. Insertion order is navigation order.
///
/// The collection outlives any single playback session. Rendering reads it; the
/// only mutation is the viewed flag.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Position, Story, StoryCollection, StoryId};
///
/// let stories = StoryCollection::new(vec![Story {
///     id: StoryId(1),
///     username: "ana".to_string(),
///     avatar: "ana.png".to_string(),
///     images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
///     viewed: false,
/// }]);
///
/// assert_eq!(stories.index_of(StoryId(1)), Some(0));
/// assert_eq!(stories.image(Position::open(0, 1)), Some("b.jpg"));
/// assert!(!stories.contains(Position::open(0, 2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryCollection {
    stories: Vec<Story>,
}

impl StoryCollection {
    /// Create a collection from stories in navigation order.
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Number of stories.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the collection holds no stories.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Story at an index.
    pub fn get(&self, index: usize) -> Option<&Story> {
        self.stories.get(index)
    }

    /// All stories in navigation order.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Iterate stories in navigation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Story> {
        self.stories.iter()
    }

    /// Index of the story with the given id.
    pub fn index_of(&self, id: StoryId) -> Option<usize> {
        self.stories.iter().position(|story| story.id == id)
    }

    /// Number of images in the story at `index`, zero when out of range.
    pub fn image_count(&self, index: usize) -> usize {
        self.stories.get(index).map_or(0, Story::image_count)
    }

    /// Last image index of the story at `index`.
    ///
    /// `None` when the index is out of range or the story has no images.
    pub fn last_image_index(&self, index: usize) -> Option<usize> {
        self.stories.get(index).and_then(Story::last_image_index)
    }

    /// Whether `position` is open and in bounds.
    pub fn contains(&self, position: Position) -> bool {
        match position {
            Position::Closed => false,
            Position::Open { story, image } => image < self.image_count(story),
        }
    }

    /// Story displayed at `position`.
    pub fn story_at(&self, position: Position) -> Option<&Story> {
        position.story_index().and_then(|index| self.stories.get(index))
    }

    /// Image reference displayed at `position`.
    pub fn image(&self, position: Position) -> Option<&str> {
        match position {
            Position::Closed => None,
            Position::Open { story, image } => self
                .stories
                .get(story)
                .and_then(|s| s.images.get(image))
                .map(String::as_str),
        }
    }

    /// Set the viewed flag of the story with the given id.
    ///
    /// Returns true when the flag changed. Marking an already viewed story, or an
    /// unknown id, has no effect.
    #[tracing::instrument(skip(self))]
    pub fn set_viewed(&mut self, id: StoryId) -> bool {
        match self.stories.iter_mut().find(|story| story.id == id) {
            Some(story) if !story.viewed => {
                story.viewed = true;
                tracing::debug!("Story marked viewed");
                true
            }
            Some(_) => false,
            None => {
                tracing::debug!("No story with this id to mark viewed");
                false
            }
        }
    }

    /// Number of stories not yet viewed.
    pub fn unviewed_count(&self) -> usize {
        self.stories.iter().filter(|story| !story.viewed).count()
    }
}

impl From<Vec<Story>> for StoryCollection {
    fn from(stories: Vec<Story>) -> Self {
        Self::new(stories)
    }
}

impl<'a> IntoIterator for &'a StoryCollection {
    type Item = &'a Story;
    type IntoIter = std::slice::Iter<'a, Story>;

    fn into_iter(self) -> Self::IntoIter {
        self.stories.iter()
    }
}
