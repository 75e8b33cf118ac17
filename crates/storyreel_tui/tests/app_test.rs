use storyreel_core::{Comment, Feed, Post, PostId};
use storyreel_tui::{App, AppMode, TuiConfig};

fn post(id: u64, comments: usize) -> Post {
    Post {
        id: PostId(id),
        username: format!("user{id}"),
        avatar: String::new(),
        image: format!("post{id}.jpg"),
        caption: "caption".to_string(),
        likes: 10,
        comments: (0..comments)
            .map(|i| Comment {
                username: format!("c{i}"),
                text: "nice".to_string(),
            })
            .collect(),
        timestamp: "1h".to_string(),
        liked: false,
    }
}

fn app() -> App {
    App::new(Feed::new(vec![post(1, 0), post(2, 3)]))
}

#[test]
fn new_app_starts_home() {
    let app = app();
    assert_eq!(app.mode, AppMode::Home);
    assert_eq!(app.selected_story, 0);
    assert!(!app.should_quit);
}

#[test]
fn story_selection_stays_in_ring() {
    let mut app = app();
    app.select_previous_story();
    assert_eq!(app.selected_story, 0);

    app.select_next_story(2);
    app.select_next_story(2);
    assert_eq!(app.selected_story, 1);
}

#[test]
fn post_selection_stays_in_feed() {
    let mut app = app();
    app.select_next_post();
    app.select_next_post();
    assert_eq!(app.selected_post, 1);
    assert_eq!(app.selected_post().map(|p| p.id), Some(PostId(2)));

    app.select_previous_post();
    app.select_previous_post();
    assert_eq!(app.selected_post, 0);
}

#[test]
fn like_toggles_selected_post() {
    let mut app = app();
    app.select_next_post();

    assert_eq!(app.toggle_selected_like(), Some(true));
    assert_eq!(app.selected_post().map(|p| p.likes), Some(11));
    assert_eq!(app.toggle_selected_like(), Some(false));
    assert_eq!(app.selected_post().map(|p| p.likes), Some(10));
    assert!(app.feed.get(0).is_some_and(|p| !p.liked));
}

#[test]
fn like_on_empty_feed_is_none() {
    let mut app = App::new(Feed::default());
    assert_eq!(app.toggle_selected_like(), None);
}

#[test]
fn tui_config_defaults() {
    let config: TuiConfig = serde_json::from_str("{}").expect("empty config");
    assert_eq!(*config.frame_rate_ms(), 50);
    assert!(config.log_file().is_none());
}

#[test]
fn comments_expand_per_post() {
    let mut app = app();
    app.select_next_post();

    assert_eq!(app.toggle_selected_comments(), Some(true));
    assert!(app.is_expanded(PostId(2)));
    assert!(!app.is_expanded(PostId(1)));

    app.select_previous_post();
    assert!(app.is_expanded(PostId(2)));

    app.select_next_post();
    assert_eq!(app.toggle_selected_comments(), Some(false));
    assert!(!app.is_expanded(PostId(2)));
}

#[test]
fn comment_toggle_on_empty_feed_is_none() {
    let mut app = App::new(Feed::default());
    assert_eq!(app.toggle_selected_comments(), None);
    assert!(app.expanded.is_empty());
}
