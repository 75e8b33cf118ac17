//! Application state for the home screen and player.

use std::collections::HashSet;
use storyreel_core::{Feed, Post, PostId};

/// Number of comments previewed under each post.
pub const COMMENT_PREVIEW: usize = 2;

/// Application mode determines which view is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Story ring and post feed
    Home,
    /// Full-screen story player
    Player,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Post feed
    pub feed: Feed,
    /// Selected story in the ring
    pub selected_story: usize,
    /// Selected post in the feed
    pub selected_post: usize,
    /// Posts showing every comment instead of the preview
    pub expanded: HashSet<PostId>,
    /// Status message to display
    pub status_message: String,
    /// Whether to quit the application
    pub should_quit: bool,
    /// Terminal width in columns, for mapping clicks to tap zones
    pub width: u16,
}

impl App {
    /// Create a new App on the home screen.
    pub fn new(feed: Feed) -> Self {
        Self {
            mode: AppMode::Home,
            feed,
            selected_story: 0,
            selected_post: 0,
            expanded: HashSet::new(),
            status_message: String::from("Enter: watch story | L: like"),
            should_quit: false,
            width: 0,
        }
    }

    /// Move the ring selection left.
    pub fn select_previous_story(&mut self) {
        self.selected_story = self.selected_story.saturating_sub(1);
    }

    /// Move the ring selection right, within `count` stories.
    pub fn select_next_story(&mut self, count: usize) {
        if self.selected_story + 1 < count {
            self.selected_story += 1;
        }
    }

    /// Move the feed selection up.
    pub fn select_previous_post(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    /// Move the feed selection down.
    pub fn select_next_post(&mut self) {
        if self.selected_post + 1 < self.feed.len() {
            self.selected_post += 1;
        }
    }

    /// The selected post, if the feed is not empty.
    pub fn selected_post(&self) -> Option<&Post> {
        self.feed.get(self.selected_post)
    }

    /// Toggle the like on the selected post, returning the new state.
    pub fn toggle_selected_like(&mut self) -> Option<bool> {
        let id = self.selected_post()?.id;
        let liked = self.feed.toggle_like(id)?;
        self.status_message = if liked {
            format!("Liked post {}", id)
        } else {
            format!("Unliked post {}", id)
        };
        Some(liked)
    }

    /// Whether `post` shows all of its comments.
    pub fn is_expanded(&self, post: PostId) -> bool {
        self.expanded.contains(&post)
    }

    /// Show or hide all comments on the selected post, returning whether it is
    /// now expanded.
    pub fn toggle_selected_comments(&mut self) -> Option<bool> {
        let id = self.selected_post()?.id;
        let expanded = if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        };
        self.status_message = if expanded {
            format!("Showing all comments on post {}", id)
        } else {
            format!("Showing comment preview on post {}", id)
        };
        Some(expanded)
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
