//! Cancellable scheduled tasks.
//!
//! Every delayed callback in the engine (progress timers, transition delays) runs
//! as a spawned tokio task that posts [`PlaybackEvent`]s back into the event
//! channel, stamped with the [`TaskId`] of the task that produced them.
//! Cancelling aborts the task; the receiving side additionally drops any event
//! whose task id is no longer current, so events queued before the abort are
//! never observed either.

use crate::{EventSender, LoadTicket, PlaybackEvent, TaskId};
use std::future::Future;
use storyreel_core::{PlaybackConfig, Position};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

/// Handle to a spawned task that can be cancelled exactly once.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct ScheduledTask {
    id: TaskId,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `task` on the runtime under `id`.
    pub fn spawn<F>(id: TaskId, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            id,
            handle: tokio::spawn(task),
        }
    }

    /// Identity stamped on the events this task produces.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Cancel the task. Consumes the handle.
    #[instrument(skip(self), fields(task = %self.id))]
    pub fn cancel(self) {
        debug!("Canceling scheduled task");
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Issues task ids and load tickets and spawns scheduled work.
#[derive(Debug)]
pub struct Scheduler {
    sender: EventSender,
    config: PlaybackConfig,
    next_id: u64,
}

impl Scheduler {
    /// Create a scheduler posting into `sender`.
    pub fn new(sender: EventSender, config: PlaybackConfig) -> Self {
        Self {
            sender,
            config,
            next_id: 0,
        }
    }

    /// Timing configuration.
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Sending half of the event channel.
    pub fn sender(&self) -> &EventSender {
        &self.sender
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Allocate a fresh task id.
    pub fn task_id(&mut self) -> TaskId {
        TaskId(self.next())
    }

    /// Allocate a fresh load ticket.
    pub fn load_ticket(&mut self) -> LoadTicket {
        LoadTicket(self.next())
    }

    /// Schedule `TransitionElapsed` after the configured transition delay.
    #[instrument(skip(self))]
    pub fn schedule_transition(&mut self) -> ScheduledTask {
        let id = self.task_id();
        let delay = self.config.transition_delay();
        let sender = self.sender.clone();
        trace!(task = %id, ?delay, "Scheduling transition commit");
        ScheduledTask::spawn(id, async move {
            tokio::time::sleep(delay).await;
            sender.send(PlaybackEvent::TransitionElapsed { task: id });
        })
    }

    /// Build a load request for the image at `position`.
    pub fn load_request(&mut self, position: Position, image: impl Into<String>) -> LoadRequest {
        let ticket = self.load_ticket();
        LoadRequest {
            position,
            image: image.into(),
            signal: LoadSignal {
                ticket,
                sender: self.sender.clone(),
            },
        }
    }
}

/// Request for the host to load an image before playback of it starts.
#[derive(Debug, derive_getters::Getters)]
pub struct LoadRequest {
    /// Position the image is displayed at
    position: Position,
    /// Image reference
    image: String,
    /// Signal to fire once the image is ready
    #[getter(skip)]
    signal: LoadSignal,
}

impl LoadRequest {
    /// Ticket identifying this request.
    pub fn ticket(&self) -> LoadTicket {
        self.signal.ticket
    }

    /// Split off the completion signal.
    pub fn into_signal(self) -> LoadSignal {
        self.signal
    }
}

/// One-shot completion signal for an image load.
#[derive(Debug)]
pub struct LoadSignal {
    ticket: LoadTicket,
    sender: EventSender,
}

impl LoadSignal {
    /// Ticket this signal completes.
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    /// Report the image as loaded. Consumes the signal.
    pub fn loaded(self) {
        trace!(ticket = %self.ticket, "Image loaded");
        self.sender
            .send(PlaybackEvent::ImageLoaded { ticket: self.ticket });
    }
}
