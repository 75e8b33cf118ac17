use std::time::Duration;
use storyreel_core::{PlaybackConfig, Position, Story, StoryCollection, StoryId};
use storyreel_playback::{ImmediateLoader, NoopHost, PlaybackEvent, PlaybackOrchestrator, TaskId};
use tokio::time::Instant;

fn single_image() -> StoryCollection {
    StoryCollection::new(vec![Story {
        id: StoryId(7),
        username: "solo".to_string(),
        avatar: String::new(),
        images: vec!["only.jpg".to_string()],
        viewed: false,
    }])
}

/// Run until the first timer expires, returning its ticks and expiry time.
async fn first_timer(config: PlaybackConfig) -> (Vec<u8>, Duration) {
    let mut player = PlaybackOrchestrator::new(single_image(), config, NoopHost, ImmediateLoader)
        .expect("valid config");
    player.handle(PlaybackEvent::Open(StoryId(7)));

    let mut timer: Option<TaskId> = None;
    let mut started = Instant::now();
    let mut ticks = Vec::new();
    loop {
        match player.step().await.expect("channel open") {
            PlaybackEvent::ImageLoaded { .. } => {
                timer = player.session().and_then(|s| s.active_timer());
                started = Instant::now();
            }
            PlaybackEvent::TimerTick { timer: id, progress } => {
                assert_eq!(Some(id), timer);
                ticks.push(progress);
            }
            PlaybackEvent::TimerExpired { timer: id } => {
                assert_eq!(Some(id), timer);
                return (ticks, started.elapsed());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn default_timer_ticks_by_elapsed_time_then_expires() {
    let (ticks, elapsed) = first_timer(PlaybackConfig::default()).await;

    assert_eq!(elapsed, Duration::from_millis(5_000));
    assert_eq!(ticks.len(), 49);
    assert_eq!(ticks.first(), Some(&2));
    assert_eq!(ticks.last(), Some(&98));
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test(start_paused = true)]
async fn uneven_tick_interval_caps_below_hundred() {
    let config = PlaybackConfig::builder()
        .image_duration_ms(1_000)
        .tick_interval_ms(300)
        .build();
    let (ticks, elapsed) = first_timer(config).await;

    assert_eq!(elapsed, Duration::from_millis(1_000));
    assert_eq!(ticks, vec![30, 60, 90]);
}

#[tokio::test(start_paused = true)]
async fn expiry_begins_exactly_one_forward_transition() {
    let mut player =
        PlaybackOrchestrator::new(single_image(), PlaybackConfig::default(), NoopHost, ImmediateLoader)
            .expect("valid config");
    player.handle(PlaybackEvent::Open(StoryId(7)));

    let mut transitions = 0;
    while player.is_open() {
        if let PlaybackEvent::TransitionElapsed { .. } = player.step().await.expect("channel open") {
            transitions += 1;
        }
    }

    assert_eq!(transitions, 1);
    assert_eq!(player.position(), Position::Closed);
    assert!(player.stories().get(0).is_some_and(|s| s.viewed));
}

#[tokio::test(start_paused = true)]
async fn progress_reflects_time_actually_elapsed() {
    let mut player =
        PlaybackOrchestrator::new(single_image(), PlaybackConfig::default(), NoopHost, ImmediateLoader)
            .expect("valid config");
    player.handle(PlaybackEvent::Open(StoryId(7)));
    let loaded = player.step().await.expect("channel open");
    assert!(matches!(loaded, PlaybackEvent::ImageLoaded { .. }));

    tokio::time::advance(Duration::from_millis(2_500)).await;
    let tick = player.step().await.expect("channel open");

    assert!(matches!(tick, PlaybackEvent::TimerTick { progress: 50, .. }), "{tick:?}");
    assert_eq!(player.session().map(|s| s.progress()), Some(50));
    assert_eq!(player.position(), Position::open(0, 0));
}
