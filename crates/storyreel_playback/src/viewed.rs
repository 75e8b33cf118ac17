//! Viewed-state tracking for a playback session.

use std::collections::HashSet;
use storyreel_core::{StoryCollection, StoryId};
use tracing::{debug, instrument};

/// Records which stories a session has entered and flags them viewed.
#[derive(Debug, Default)]
pub struct ViewedTracker {
    entered: HashSet<StoryId>,
}

impl ViewedTracker {
    /// Create a tracker for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the story viewed the first time the session enters it.
    ///
    /// Returns true when this is the session's first entry into the story.
    #[instrument(skip(self, collection))]
    pub fn enter(&mut self, collection: &mut StoryCollection, id: StoryId) -> bool {
        if !self.entered.insert(id) {
            return false;
        }
        let flipped = collection.set_viewed(id);
        debug!(flipped, "Entered story");
        true
    }

    /// Whether the session has entered the story.
    pub fn has_entered(&self, id: StoryId) -> bool {
        self.entered.contains(&id)
    }

    /// Number of distinct stories entered.
    pub fn entered_count(&self) -> usize {
        self.entered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::Story;

    fn stories() -> StoryCollection {
        StoryCollection::new(
            (1..=2)
                .map(|id| Story {
                    id: StoryId(id),
                    username: String::new(),
                    avatar: String::new(),
                    images: vec!["x".to_string()],
                    viewed: false,
                })
                .collect(),
        )
    }

    #[test]
    fn first_entry_marks_viewed() {
        let mut collection = stories();
        let mut tracker = ViewedTracker::new();

        assert!(tracker.enter(&mut collection, StoryId(2)));
        assert!(collection.get(1).is_some_and(|s| s.viewed));
        assert!(!collection.get(0).is_some_and(|s| s.viewed));
    }

    #[test]
    fn repeated_entry_has_no_further_effect() {
        let mut collection = stories();
        let mut tracker = ViewedTracker::new();

        tracker.enter(&mut collection, StoryId(1));
        let after_once = collection.clone();
        assert!(!tracker.enter(&mut collection, StoryId(1)));

        assert_eq!(collection, after_once);
        assert_eq!(tracker.entered_count(), 1);
    }

    #[test]
    fn previously_viewed_story_still_counts_as_entered() {
        let mut collection = stories();
        collection.set_viewed(StoryId(1));
        let mut tracker = ViewedTracker::new();

        assert!(tracker.enter(&mut collection, StoryId(1)));
        assert!(tracker.has_entered(StoryId(1)));
    }
}
