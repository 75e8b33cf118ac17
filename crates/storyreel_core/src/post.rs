//! Feed post types.

use serde::{Deserialize, Serialize};

/// Identity of a feed post.
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
pub struct PostId(pub u64);

/// A comment under a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author
    pub username: String,
    /// Comment body
    pub text: String,
}

/// A feed post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identity
    pub id: PostId,
    /// Author display name
    pub username: String,
    /// Author avatar reference
    pub avatar: String,
    /// Post image reference
    pub image: String,
    /// Caption text
    pub caption: String,
    /// Like count, including the current user's like when `liked`
    pub likes: u64,
    /// Comments in display order
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Source-formatted timestamp, e.g. "2 hours ago"
    pub timestamp: String,
    /// Whether the current user likes the post
    #[serde(default)]
    pub liked: bool,
}

impl Post {
    /// The first `limit` comments.
    pub fn preview_comments(&self, limit: usize) -> &[Comment] {
        &self.comments[..self.comments.len().min(limit)]
    }

    /// Whether more comments exist than the preview shows.
    pub fn has_more_comments(&self, limit: usize) -> bool {
        self.comments.len() > limit
    }
}

/// Ordered feed of posts.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Feed, PostId};
///
/// let mut feed: Feed = serde_json::from_str(r#"[{
///     "id": 3, "username": "bo", "avatar": "bo.png", "image": "p.jpg",
///     "caption": "hi", "likes": 10, "timestamp": "1h"
/// }]"#).unwrap();
///
/// assert_eq!(feed.toggle_like(PostId(3)), Some(true));
/// assert_eq!(feed.get(0).map(|p| p.likes), Some(11));
/// assert_eq!(feed.toggle_like(PostId(3)), Some(false));
/// assert_eq!(feed.get(0).map(|p| p.likes), Some(10));
/// assert_eq!(feed.toggle_like(PostId(99)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    /// Create a feed from posts in display order.
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Posts in display order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Post at an index.
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Flip the liked flag of a post and adjust its like count, returning the
    /// new state.
    #[tracing::instrument(skip(self))]
    pub fn toggle_like(&mut self, id: PostId) -> Option<bool> {
        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        post.liked = !post.liked;
        post.likes = if post.liked {
            post.likes.saturating_add(1)
        } else {
            post.likes.saturating_sub(1)
        };
        tracing::debug!(liked = post.liked, likes = post.likes, "Toggled like");
        Some(post.liked)
    }
}
