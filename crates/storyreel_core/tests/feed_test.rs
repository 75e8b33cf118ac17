use storyreel_core::{Feed, PostId};

const POSTS: &str = r#"[
    {"id": 1, "username": "ana", "avatar": "", "image": "a.jpg", "caption": "",
     "likes": 342, "timestamp": "5h", "liked": true},
    {"id": 2, "username": "bo", "avatar": "", "image": "b.jpg", "caption": "",
     "likes": 0, "timestamp": "1d",
     "comments": [
        {"username": "x", "text": "1"},
        {"username": "y", "text": "2"},
        {"username": "z", "text": "3"}
     ]}
]"#;

fn feed() -> Feed {
    serde_json::from_str(POSTS).expect("valid posts json")
}

#[test]
fn likes_are_kept_as_reported() {
    let feed = feed();
    let liked = feed.get(0).expect("first post");
    assert!(liked.liked);
    assert_eq!(liked.likes, 342);
}

#[test]
fn unlike_then_like_restores_count() {
    let mut feed = feed();

    assert_eq!(feed.toggle_like(PostId(1)), Some(false));
    assert_eq!(feed.get(0).map(|p| p.likes), Some(341));
    assert_eq!(feed.toggle_like(PostId(1)), Some(true));
    assert_eq!(feed.get(0).map(|p| p.likes), Some(342));
}

#[test]
fn unliking_at_zero_does_not_underflow() {
    let mut feed: Feed = serde_json::from_str(
        r#"[{"id": 9, "username": "c", "avatar": "", "image": "", "caption": "",
             "likes": 0, "timestamp": "", "liked": true}]"#,
    )
    .expect("valid post json");

    assert_eq!(feed.toggle_like(PostId(9)), Some(false));
    assert_eq!(feed.get(0).map(|p| p.likes), Some(0));
}

#[test]
fn comment_preview_is_limited() {
    let feed = feed();
    let post = feed.get(1).expect("second post");
    assert_eq!(post.preview_comments(2).len(), 2);
    assert!(post.has_more_comments(2));
    assert!(!post.has_more_comments(3));
}
