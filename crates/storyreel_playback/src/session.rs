//! State owned by one open run of the player.

use crate::{LoadTicket, PlaybackTimer, ScheduledTask, Scheduler, TaskId, ViewedTracker};
use storyreel_core::{Direction, Position, StoryCollection, StoryId};
use tracing::{debug, instrument, trace};

/// Where the displayed image is in its load → play lifecycle.
#[derive(Debug)]
enum Stage {
    /// Waiting for the image under `ticket` to load
    Loading { ticket: LoadTicket },
    /// Image shown, timer running
    Playing { timer: PlaybackTimer },
    /// Timer cancelled, waiting for a transition to commit
    Held,
}

/// Slide transition waiting for its delay to elapse.
#[derive(Debug)]
struct PendingTransition {
    direction: Direction,
    task: ScheduledTask,
}

/// A single playback session.
///
/// Owns the current position and at most one running timer. All position
/// changes go through [`PlaybackSession::move_to`], which drops any running
/// timer before the new image can start one.
#[derive(Debug)]
pub struct PlaybackSession {
    position: Position,
    viewed: ViewedTracker,
    stage: Stage,
    transition: Option<PendingTransition>,
    progress: u8,
}

impl PlaybackSession {
    /// Start a session at `position`, waiting on the load under `ticket`.
    pub fn new(position: Position, ticket: LoadTicket) -> Self {
        Self {
            position,
            viewed: ViewedTracker::new(),
            stage: Stage::Loading { ticket },
            transition: None,
            progress: 0,
        }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Progress through the current image, 0..=100.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Direction of the pending slide transition, if any.
    pub fn slide(&self) -> Option<Direction> {
        self.transition.as_ref().map(|pending| pending.direction)
    }

    /// Whether the current image is still loading.
    pub fn is_loading(&self) -> bool {
        matches!(self.stage, Stage::Loading { .. })
    }

    /// Id of the running timer, if any.
    pub fn active_timer(&self) -> Option<TaskId> {
        match &self.stage {
            Stage::Playing { timer } => Some(timer.id()),
            _ => None,
        }
    }

    /// Stories entered during this session.
    pub fn viewed(&self) -> &ViewedTracker {
        &self.viewed
    }

    /// Record entry into a story, marking it viewed on first entry.
    pub fn enter(&mut self, collection: &mut StoryCollection, id: StoryId) -> bool {
        self.viewed.enter(collection, id)
    }

    /// Start the timer if `ticket` is the load the session is waiting on.
    ///
    /// Returns false for stale or unexpected tickets.
    #[instrument(skip(self, scheduler), fields(position = %self.position))]
    pub fn accept_loaded(&mut self, ticket: LoadTicket, scheduler: &mut Scheduler) -> bool {
        match self.stage {
            Stage::Loading { ticket: expected } if expected == ticket => {
                self.stage = Stage::Playing {
                    timer: PlaybackTimer::start(scheduler),
                };
                true
            }
            _ => {
                trace!("Ignoring stale image load");
                false
            }
        }
    }

    /// Apply a tick if it came from the running timer.
    pub fn accept_tick(&mut self, timer: TaskId, progress: u8) -> bool {
        if self.active_timer() == Some(timer) {
            self.progress = progress.min(100);
            true
        } else {
            trace!(%timer, "Ignoring tick from inactive timer");
            false
        }
    }

    /// Whether an expiry came from the running timer.
    pub fn accept_expiry(&self, timer: TaskId) -> bool {
        let current = self.active_timer() == Some(timer);
        if !current {
            trace!(%timer, "Ignoring expiry from inactive timer");
        }
        current
    }

    /// Begin a slide transition in `direction`.
    ///
    /// Cancels the running timer and any previously pending transition, then
    /// schedules the commit after the transition delay.
    #[instrument(skip(self, scheduler), fields(position = %self.position))]
    pub fn begin_transition(&mut self, direction: Direction, scheduler: &mut Scheduler) {
        self.hold();
        if let Some(previous) = self.transition.take() {
            debug!(replaced = %previous.direction, "Replacing pending transition");
            previous.task.cancel();
        }
        let task = scheduler.schedule_transition();
        self.transition = Some(PendingTransition { direction, task });
    }

    /// Claim the pending transition if `task` is its delay.
    pub fn take_transition(&mut self, task: TaskId) -> Option<Direction> {
        match &self.transition {
            Some(pending) if pending.task.id() == task => {
                self.transition.take().map(|pending| pending.direction)
            }
            _ => {
                trace!(%task, "Ignoring stale transition");
                None
            }
        }
    }

    /// Move to `position` and wait on the load under `ticket`.
    #[instrument(skip(self), fields(from = %self.position))]
    pub fn move_to(&mut self, position: Position, ticket: LoadTicket) {
        self.hold();
        self.position = position;
        self.progress = 0;
        self.stage = Stage::Loading { ticket };
    }

    /// Cancel all scheduled work. Consumes the session.
    pub fn end(mut self) {
        self.hold();
        if let Some(pending) = self.transition.take() {
            pending.task.cancel();
        }
    }

    fn hold(&mut self) {
        if let Stage::Playing { timer } = std::mem::replace(&mut self.stage, Stage::Held) {
            timer.cancel();
        }
    }
}
