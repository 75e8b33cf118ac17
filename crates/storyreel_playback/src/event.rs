//! Playback events and the channel that carries them.

use storyreel_core::{Direction, StoryId};
use tokio::sync::mpsc;

/// Identity of a scheduled task (progress timer or transition delay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("task#{}", _0)]
pub struct TaskId(pub(crate) u64);

/// Identity of an image load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("load#{}", _0)]
pub struct LoadTicket(pub(crate) u64);

/// Input region mapped to a manual navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TapZone {
    /// Left region, navigates backward
    Previous,
    /// Right region, navigates forward
    Next,
}

impl TapZone {
    /// The navigation direction this zone triggers.
    pub fn direction(self) -> Direction {
        match self {
            Self::Previous => Direction::Backward,
            Self::Next => Direction::Forward,
        }
    }

    /// Map a horizontal coordinate within a region of `width` columns.
    ///
    /// The left third is `Previous`, the right third is `Next`, the middle third
    /// is not a tap zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_playback::TapZone;
    ///
    /// assert_eq!(TapZone::from_column(0, 90), Some(TapZone::Previous));
    /// assert_eq!(TapZone::from_column(45, 90), None);
    /// assert_eq!(TapZone::from_column(89, 90), Some(TapZone::Next));
    /// ```
    pub fn from_column(column: u16, width: u16) -> Option<Self> {
        if width == 0 || column >= width {
            return None;
        }
        let third = width / 3;
        if column < third {
            Some(Self::Previous)
        } else if column >= width - third {
            Some(Self::Next)
        } else {
            None
        }
    }
}

/// Discrete events processed one at a time by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// User selected a story
    Open(StoryId),
    /// User tapped a navigation zone
    Tap(TapZone),
    /// User dismissed the player
    Close,
    /// The image requested under `ticket` finished loading
    ImageLoaded {
        /// Ticket of the load request
        ticket: LoadTicket,
    },
    /// Progress update from a running timer
    TimerTick {
        /// Timer that produced the tick
        timer: TaskId,
        /// Elapsed fraction of the display duration, 0..=100
        progress: u8,
    },
    /// A timer reached the display duration
    TimerExpired {
        /// Timer that expired
        timer: TaskId,
    },
    /// A slide transition delay elapsed
    TransitionElapsed {
        /// Transition task that elapsed
        task: TaskId,
    },
}

/// Cloneable sending half of the playback event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::UnboundedSender<PlaybackEvent>,
}

impl EventSender {
    /// Queue an event. Returns false when the orchestrator is gone.
    pub fn send(&self, event: PlaybackEvent) -> bool {
        match self.inner.send(event) {
            Ok(()) => true,
            Err(_) => {
                tracing::trace!(?event, "Playback event dropped, receiver closed");
                false
            }
        }
    }
}

/// Create a linked sender and receiver.
pub(crate) fn channel() -> (EventSender, mpsc::UnboundedReceiver<PlaybackEvent>) {
    let (inner, receiver) = mpsc::unbounded_channel();
    (EventSender { inner }, receiver)
}
