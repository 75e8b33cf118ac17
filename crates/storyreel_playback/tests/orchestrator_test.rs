use std::time::Duration;
use storyreel_core::{PlaybackConfig, Position, Story, StoryCollection, StoryId};
use storyreel_error::PlaybackErrorKind;
use storyreel_playback::{
    ImageLoader, ImmediateLoader, LoadRequest, LoadSignal, PlaybackEvent, PlaybackHost,
    PlaybackOrchestrator, TapZone,
};
use tokio::time::{Instant, timeout};

#[derive(Debug, Default)]
struct RecordingHost {
    next: Vec<Position>,
    previous: Vec<Position>,
    closes: usize,
}

impl PlaybackHost for RecordingHost {
    fn on_close(&mut self) {
        self.closes += 1;
    }

    fn on_next(&mut self, position: Position) {
        self.next.push(position);
    }

    fn on_previous(&mut self, position: Position) {
        self.previous.push(position);
    }
}

/// Holds load signals until the test releases them.
#[derive(Debug, Default)]
struct ManualLoader {
    pending: Vec<LoadSignal>,
}

impl ImageLoader for ManualLoader {
    fn load(&mut self, request: LoadRequest) {
        self.pending.push(request.into_signal());
    }
}

fn story(id: u64, images: &[&str]) -> Story {
    Story {
        id: StoryId(id),
        username: format!("user{id}"),
        avatar: format!("avatar{id}.png"),
        images: images.iter().map(|s| s.to_string()).collect(),
        viewed: false,
    }
}

fn scenario() -> StoryCollection {
    StoryCollection::new(vec![story(1, &["a", "b"]), story(2, &["c"])])
}

fn orchestrator<L: ImageLoader>(
    stories: StoryCollection,
    loader: L,
) -> PlaybackOrchestrator<RecordingHost, L> {
    PlaybackOrchestrator::new(
        stories,
        PlaybackConfig::default(),
        RecordingHost::default(),
        loader,
    )
    .expect("default config is valid")
}

fn viewed(orchestrator: &PlaybackOrchestrator<RecordingHost, impl ImageLoader>) -> Vec<bool> {
    orchestrator.stories().iter().map(|s| s.viewed).collect()
}

/// Step until `done` holds, returning the events handled on the way.
async fn step_until<L: ImageLoader>(
    orchestrator: &mut PlaybackOrchestrator<RecordingHost, L>,
    done: impl Fn(&PlaybackOrchestrator<RecordingHost, L>) -> bool,
) -> Vec<PlaybackEvent> {
    let mut events = Vec::new();
    while !done(&*orchestrator) {
        events.push(orchestrator.step().await.expect("channel open"));
    }
    events
}

fn playing<L: ImageLoader>(orchestrator: &PlaybackOrchestrator<RecordingHost, L>) -> bool {
    orchestrator
        .session()
        .is_some_and(|s| s.active_timer().is_some())
}

#[tokio::test(start_paused = true)]
async fn timer_drives_scenario_to_the_end() {
    let mut player = orchestrator(scenario(), ImmediateLoader);
    let started = Instant::now();

    player.handle(PlaybackEvent::Open(StoryId(1)));
    assert_eq!(player.position(), Position::open(0, 0));
    assert_eq!(viewed(&player), vec![true, false]);

    player.run_until_closed().await.expect("run");

    assert_eq!(
        player.host().next,
        vec![Position::open(0, 1), Position::open(1, 0)]
    );
    assert!(player.host().previous.is_empty());
    assert_eq!(player.host().closes, 1);
    assert_eq!(viewed(&player), vec![true, true]);
    assert_eq!(player.position(), Position::Closed);

    // Three images at 5000ms each, three 150ms transition delays.
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(15_450), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(15_600), "{elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_follows_scenario() {
    let mut player = orchestrator(scenario(), ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));

    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 1).await;
    assert_eq!(player.position(), Position::open(0, 1));

    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 2).await;
    assert_eq!(player.position(), Position::open(1, 0));
    assert_eq!(viewed(&player), vec![true, true]);

    player.handle(PlaybackEvent::Tap(TapZone::Previous));
    step_until(&mut player, |p| p.host().previous.len() == 1).await;
    assert_eq!(player.position(), Position::open(0, 1));

    player.handle(PlaybackEvent::Tap(TapZone::Previous));
    step_until(&mut player, |p| p.host().previous.len() == 2).await;
    assert_eq!(player.position(), Position::open(0, 0));

    player.handle(PlaybackEvent::Tap(TapZone::Previous));
    step_until(&mut player, |p| !p.is_open()).await;
    assert_eq!(player.host().closes, 1);
    assert_eq!(player.host().previous.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn tap_cancels_the_running_timer() {
    let stories = StoryCollection::new(vec![story(1, &["a", "b", "c"])]);
    let mut player = orchestrator(stories, ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));

    step_until(&mut player, |p| p.session().is_some_and(|s| s.progress() >= 20)).await;
    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 1).await;
    assert_eq!(player.position(), Position::open(0, 1));

    // The first timer would have expired around 5000ms; the new one not before
    // 6150ms. Nothing may move the player in between.
    let result = timeout(Duration::from_millis(4_800), player.run_until_closed()).await;
    assert!(result.is_err(), "player advanced on a cancelled timer");
    assert_eq!(player.position(), Position::open(0, 1));
    assert_eq!(player.host().next.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn repeated_taps_during_delay_commit_once() {
    let stories = StoryCollection::new(vec![story(1, &["a", "b", "c"])]);
    let mut player = orchestrator(stories, ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));
    step_until(&mut player, playing).await;

    player.handle(PlaybackEvent::Tap(TapZone::Next));
    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 1).await;
    step_until(&mut player, playing).await;
    assert_eq!(player.position(), Position::open(0, 1));

    // Latest direction wins.
    player.handle(PlaybackEvent::Tap(TapZone::Next));
    player.handle(PlaybackEvent::Tap(TapZone::Previous));
    step_until(&mut player, |p| p.host().previous.len() == 1).await;
    assert_eq!(player.position(), Position::open(0, 0));

    let _ = timeout(Duration::from_millis(1_000), player.run_until_closed()).await;
    assert_eq!(player.host().next.len(), 1);
    assert_eq!(player.host().previous.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn slide_direction_is_visible_until_commit() {
    let stories = StoryCollection::new(vec![story(1, &["a", "b"])]);
    let mut player = orchestrator(stories, ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));
    step_until(&mut player, playing).await;

    player.handle(PlaybackEvent::Tap(TapZone::Next));
    let view = player.view().expect("open");
    assert_eq!(*view.slide(), Some(storyreel_core::Direction::Forward));
    assert_eq!(*view.position(), Position::open(0, 0));
    assert!(player.session().is_some_and(|s| s.active_timer().is_none()));

    step_until(&mut player, |p| p.host().next.len() == 1).await;
    let view = player.view().expect("open");
    assert_eq!(*view.slide(), None);
    assert_eq!(*view.progress(), 0);
}

#[tokio::test(start_paused = true)]
async fn timer_waits_for_image_load() {
    let mut player = orchestrator(scenario(), ManualLoader::default());
    player.handle(PlaybackEvent::Open(StoryId(1)));

    let waited = timeout(Duration::from_secs(30), player.step()).await;
    assert!(waited.is_err(), "event arrived before the image loaded");
    let view = player.view().expect("open");
    assert!(*view.loading());
    assert_eq!(*view.progress(), 0);
    assert_eq!(player.position(), Position::open(0, 0));

    let signal = player.loader_mut().pending.pop().expect("load requested");
    signal.loaded();
    step_until(&mut player, playing).await;
    assert!(!*player.view().expect("open").loading());
}

#[tokio::test(start_paused = true)]
async fn stale_load_signal_is_ignored() {
    let mut player = orchestrator(scenario(), ManualLoader::default());
    player.handle(PlaybackEvent::Open(StoryId(1)));
    let first = player.loader_mut().pending.pop().expect("first load");

    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 1).await;
    let second = player.loader_mut().pending.pop().expect("second load");
    assert_ne!(first.ticket(), second.ticket());

    first.loaded();
    player.step().await.expect("stale load event");
    assert!(!playing(&player));
    assert!(*player.view().expect("open").loading());

    second.loaded();
    player.step().await.expect("current load event");
    assert!(playing(&player));
}

#[tokio::test(start_paused = true)]
async fn progress_segments_track_position() {
    let stories = StoryCollection::new(vec![story(1, &["a", "b", "c"])]);
    let mut player = orchestrator(stories, ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));
    player.handle(PlaybackEvent::Tap(TapZone::Next));
    step_until(&mut player, |p| p.host().next.len() == 1).await;
    step_until(&mut player, |p| p.session().is_some_and(|s| s.progress() >= 40)).await;

    let view = player.view().expect("open");
    let progress = *view.progress();
    assert_eq!(*view.image_index(), 1);
    assert_eq!(*view.image_count(), 3);
    assert_eq!(view.image(), "b");
    assert_eq!(view.segments(), &vec![100, progress, 0]);
}

#[tokio::test(start_paused = true)]
async fn close_notifies_once_and_silences_timers() {
    let mut player = orchestrator(scenario(), ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));
    step_until(&mut player, playing).await;

    player.handle(PlaybackEvent::Close);
    player.handle(PlaybackEvent::Close);
    assert_eq!(player.host().closes, 1);
    assert_eq!(player.position(), Position::Closed);
    assert!(player.view().is_none());

    let drained = timeout(Duration::from_secs(30), async {
        while player.step().await.is_ok() {}
    })
    .await;
    assert!(drained.is_err());
    assert_eq!(player.host().closes, 1);
    assert!(player.host().next.is_empty());
}

#[tokio::test]
async fn open_unknown_story_is_a_no_op() {
    let mut player = orchestrator(scenario(), ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(42)));

    assert_eq!(player.position(), Position::Closed);
    assert_eq!(viewed(&player), vec![false, false]);
    player.run_until_closed().await.expect("nothing to run");
    assert_eq!(player.host().closes, 0);
}

#[tokio::test]
async fn open_empty_story_lands_on_next_and_marks_both() {
    let stories = StoryCollection::new(vec![story(1, &[]), story(2, &["c"])]);
    let mut player = orchestrator(stories, ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));

    assert_eq!(player.position(), Position::open(1, 0));
    assert_eq!(viewed(&player), vec![true, true]);
}

#[tokio::test]
async fn reopening_replaces_session_without_closing() {
    let mut player = orchestrator(scenario(), ImmediateLoader);
    player.handle(PlaybackEvent::Open(StoryId(1)));
    player.handle(PlaybackEvent::Open(StoryId(2)));

    assert_eq!(player.position(), Position::open(1, 0));
    assert_eq!(player.host().closes, 0);
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let config = PlaybackConfig::builder().tick_interval_ms(0).build();
    let err = PlaybackOrchestrator::new(scenario(), config, RecordingHost::default(), ImmediateLoader)
        .expect_err("zero tick interval");

    assert!(matches!(err.kind, PlaybackErrorKind::InvalidConfig(_)));
}
