//! Event loop tying navigation, timers, the host and the image loader together.

use crate::{
    EventSender, ImageLoader, PlaybackEvent, PlaybackHost, PlaybackSession, PlayerView, Scheduler,
    TapZone, channel, navigation,
};
use storyreel_core::{Direction, PlaybackConfig, Position, StoryCollection, StoryId};
use storyreel_error::{PlaybackError, PlaybackErrorKind, PlaybackResult};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Drives playback by processing [`PlaybackEvent`]s one at a time.
///
/// The orchestrator owns the story collection, the optional open session, and
/// the receiving half of the event channel. Timers, transition delays and image
/// loads all post back into that channel, so every state change happens on the
/// single path through [`PlaybackOrchestrator::handle`].
#[derive(Debug)]
pub struct PlaybackOrchestrator<H, L> {
    stories: StoryCollection,
    session: Option<PlaybackSession>,
    scheduler: Scheduler,
    receiver: mpsc::UnboundedReceiver<PlaybackEvent>,
    host: H,
    loader: L,
}

impl<H, L> PlaybackOrchestrator<H, L>
where
    H: PlaybackHost,
    L: ImageLoader,
{
    /// Create an orchestrator over a validated collection.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the timing configuration cannot drive
    /// playback.
    #[instrument(skip_all, fields(stories = stories.len()))]
    pub fn new(
        stories: StoryCollection,
        config: PlaybackConfig,
        host: H,
        loader: L,
    ) -> PlaybackResult<Self> {
        config
            .validate()
            .map_err(|e| PlaybackError::new(PlaybackErrorKind::InvalidConfig(e.message)))?;
        let (sender, receiver) = channel();
        debug!("Created playback orchestrator");
        Ok(Self {
            stories,
            session: None,
            scheduler: Scheduler::new(sender, config),
            receiver,
            host,
            loader,
        })
    }

    /// Handle for posting user events from outside the orchestrator.
    pub fn sender(&self) -> EventSender {
        self.scheduler.sender().clone()
    }

    /// The story collection, including viewed flags.
    pub fn stories(&self) -> &StoryCollection {
        &self.stories
    }

    /// Current position, `Closed` when no session is open.
    pub fn position(&self) -> Position {
        self.session
            .as_ref()
            .map_or(Position::Closed, PlaybackSession::position)
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// Whether a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The presentation host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the presentation host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Mutable access to the image loader.
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }

    /// Snapshot of the player, `None` when closed.
    pub fn view(&self) -> Option<PlayerView> {
        let session = self.session.as_ref()?;
        let position = session.position();
        let story = self.stories.story_at(position)?;
        let image = self.stories.image(position)?;
        Some(PlayerView::new(
            position,
            story.id,
            story.username.clone(),
            story.avatar.clone(),
            image.to_owned(),
            story.image_count(),
            session.progress(),
            session.is_loading(),
            session.slide(),
        ))
    }

    /// Wait for the next queued event.
    ///
    /// # Errors
    ///
    /// Returns `EventChannelClosed` if every sender is gone.
    pub async fn next_event(&mut self) -> PlaybackResult<PlaybackEvent> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| PlaybackError::new(PlaybackErrorKind::EventChannelClosed))
    }

    /// Receive and handle one event, returning it.
    pub async fn step(&mut self) -> PlaybackResult<PlaybackEvent> {
        let event = self.next_event().await?;
        self.handle(event);
        Ok(event)
    }

    /// Process events until the session closes.
    ///
    /// Returns immediately when no session is open.
    pub async fn run_until_closed(&mut self) -> PlaybackResult<()> {
        while self.session.is_some() {
            self.step().await?;
        }
        Ok(())
    }

    /// Process one event.
    #[instrument(skip(self), fields(position = %self.position()))]
    pub fn handle(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Open(id) => self.open(id),
            PlaybackEvent::Tap(zone) => self.tap(zone),
            PlaybackEvent::Close => self.close(),
            PlaybackEvent::ImageLoaded { ticket } => {
                if let Some(session) = self.session.as_mut() {
                    session.accept_loaded(ticket, &mut self.scheduler);
                }
            }
            PlaybackEvent::TimerTick { timer, progress } => {
                if let Some(session) = self.session.as_mut() {
                    session.accept_tick(timer, progress);
                }
            }
            PlaybackEvent::TimerExpired { timer } => {
                let expired = self
                    .session
                    .as_ref()
                    .is_some_and(|session| session.accept_expiry(timer));
                if expired {
                    self.begin_transition(Direction::Forward);
                }
            }
            PlaybackEvent::TransitionElapsed { task } => {
                let direction = self
                    .session
                    .as_mut()
                    .and_then(|session| session.take_transition(task));
                if let Some(direction) = direction {
                    self.commit_transition(direction);
                }
            }
        }
    }

    /// Open the story with `id`, replacing any open session.
    ///
    /// Unknown ids, and stories with nothing playable from them onward, leave
    /// the player untouched.
    #[instrument(skip(self))]
    pub fn open(&mut self, id: StoryId) {
        let position = navigation::open(&self.stories, id);
        let Some(image) = self.stories.image(position).map(str::to_owned) else {
            debug!(story_id = %id, "Nothing to play, ignoring open");
            return;
        };
        if let Some(previous) = self.session.take() {
            debug!("Replacing open session");
            previous.end();
        }

        let request = self.scheduler.load_request(position, image);
        let mut session = PlaybackSession::new(position, request.ticket());
        session.enter(&mut self.stories, id);
        if let Some(landed) = self.stories.story_at(position).map(|story| story.id) {
            session.enter(&mut self.stories, landed);
        }
        info!(story_id = %id, %position, "Opened story");
        self.session = Some(session);
        self.loader.load(request);
    }

    /// Begin navigation from a tap zone.
    pub fn tap(&mut self, zone: TapZone) {
        trace!(%zone, "Tap");
        self.begin_transition(zone.direction());
    }

    /// Dismiss the player. No-op when closed.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        match self.session.take() {
            Some(session) => {
                session.end();
                info!("Closed player");
                self.host.on_close();
            }
            None => trace!("Close with no open session"),
        }
    }

    fn begin_transition(&mut self, direction: Direction) {
        if let Some(session) = self.session.as_mut() {
            session.begin_transition(direction, &mut self.scheduler);
        }
    }

    #[instrument(skip(self))]
    fn commit_transition(&mut self, direction: Direction) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let from = session.position();
        let next = navigation::advance(&self.stories, from, direction);
        let Some(image) = self.stories.image(next).map(str::to_owned) else {
            debug!(%from, "Sequence exhausted");
            self.close();
            return;
        };

        if next.story_index() != from.story_index() {
            if let Some(id) = self.stories.story_at(next).map(|story| story.id) {
                session.enter(&mut self.stories, id);
            }
        }
        let request = self.scheduler.load_request(next, image);
        session.move_to(next, request.ticket());
        debug!(story_index = ?next.story_index(), image_index = ?next.image_index(), "Committed transition");
        self.loader.load(request);

        match direction {
            Direction::Forward => self.host.on_next(next),
            Direction::Backward => self.host.on_previous(next),
        }
    }
}
