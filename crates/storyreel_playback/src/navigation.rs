//! Position transitions over a story collection.
//!
//! These are pure functions of the collection shape and the current position.
//! Stories without images are skipped: no returned position ever points into
//! an empty story, so every `Open` result is in bounds.

use storyreel_core::{Direction, Position, StoryCollection, StoryId};

/// Compute the position after navigating one step in `direction`.
///
/// Forward moves to the next image, then to the first image of the next story,
/// then closes. Backward moves to the previous image, then to the last image of
/// the previous story, then closes. An out-of-bounds input position closes.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Direction, Position, Story, StoryCollection, StoryId};
/// use storyreel_playback::advance;
///
/// let story = |id: u64, n: usize| Story {
///     id: StoryId(id),
///     username: String::new(),
///     avatar: String::new(),
///     images: vec![String::new(); n],
///     viewed: false,
/// };
/// let stories = StoryCollection::new(vec![story(1, 2), story(2, 1)]);
///
/// assert_eq!(advance(&stories, Position::open(0, 1), Direction::Forward), Position::open(1, 0));
/// assert_eq!(advance(&stories, Position::open(1, 0), Direction::Backward), Position::open(0, 1));
/// assert_eq!(advance(&stories, Position::open(1, 0), Direction::Forward), Position::Closed);
/// ```
pub fn advance(collection: &StoryCollection, position: Position, direction: Direction) -> Position {
    let Position::Open { story, image } = position else {
        return Position::Closed;
    };
    if !collection.contains(position) {
        tracing::warn!(%position, "Navigating from an out-of-bounds position, closing");
        return Position::Closed;
    }

    match direction {
        Direction::Forward => {
            if image + 1 < collection.image_count(story) {
                Position::open(story, image + 1)
            } else {
                first_image_from(collection, story + 1)
            }
        }
        Direction::Backward => {
            if image > 0 {
                Position::open(story, image - 1)
            } else {
                last_image_before(collection, story)
            }
        }
    }
}

/// Position at which playback of the story with `id` begins.
///
/// Returns `Closed` when no story has that id, or when it and every later story
/// are empty.
pub fn open(collection: &StoryCollection, id: StoryId) -> Position {
    match collection.index_of(id) {
        Some(index) => first_image_from(collection, index),
        None => Position::Closed,
    }
}

/// First image of the first non-empty story at or after `start`.
fn first_image_from(collection: &StoryCollection, start: usize) -> Position {
    (start..collection.len())
        .find(|&index| collection.image_count(index) > 0)
        .map_or(Position::Closed, |index| Position::open(index, 0))
}

/// Last image of the last non-empty story strictly before `end`.
fn last_image_before(collection: &StoryCollection, end: usize) -> Position {
    (0..end)
        .rev()
        .find_map(|index| {
            collection
                .last_image_index(index)
                .map(|image| Position::open(index, image))
        })
        .unwrap_or(Position::Closed)
}
