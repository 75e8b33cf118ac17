use std::time::Duration;
use storyreel_core::{PlaybackConfig, Story, StoryCollection, StoryId};
use storyreel_playback::{NoopHost, PlaybackEvent, PlaybackOrchestrator};
use storyreel_source::ProbeLoader;
use tokio::time::timeout;

fn collection(images: &[&str]) -> StoryCollection {
    StoryCollection::new(vec![Story {
        id: StoryId(1),
        username: "ana".to_string(),
        avatar: String::new(),
        images: images.iter().map(|s| s.to_string()).collect(),
        viewed: false,
    }])
}

#[tokio::test]
async fn existing_image_starts_the_timer() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("present.jpg"), b"jpeg").expect("write image");
    let loader = ProbeLoader::new(reqwest::Client::new(), dir.path());
    let mut player = PlaybackOrchestrator::new(
        collection(&["present.jpg"]),
        PlaybackConfig::default(),
        NoopHost,
        loader,
    )
    .expect("valid config");

    player.handle(PlaybackEvent::Open(StoryId(1)));
    let event = timeout(Duration::from_secs(5), player.step())
        .await
        .expect("probe completes")
        .expect("channel open");

    assert!(matches!(event, PlaybackEvent::ImageLoaded { .. }));
    assert!(player.session().is_some_and(|s| s.active_timer().is_some()));
}

#[tokio::test]
async fn missing_image_stalls_playback() {
    let dir = tempfile::tempdir().expect("temp dir");
    let loader = ProbeLoader::new(reqwest::Client::new(), dir.path());
    let mut player = PlaybackOrchestrator::new(
        collection(&["missing.jpg"]),
        PlaybackConfig::default(),
        NoopHost,
        loader,
    )
    .expect("valid config");

    player.handle(PlaybackEvent::Open(StoryId(1)));
    let waited = timeout(Duration::from_millis(500), player.step()).await;

    assert!(waited.is_err(), "missing image must not signal loaded");
    assert!(*player.view().expect("open").loading());
}

#[test]
fn relative_paths_resolve_against_base() {
    let loader = ProbeLoader::new(reqwest::Client::new(), "/srv/data");

    assert_eq!(
        loader.resolve(std::path::Path::new("img/a.jpg")),
        std::path::PathBuf::from("/srv/data/img/a.jpg")
    );
    assert_eq!(
        loader.resolve(std::path::Path::new("/abs/b.jpg")),
        std::path::PathBuf::from("/abs/b.jpg")
    );
}
