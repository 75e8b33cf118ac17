//! Story playback engine.
//!
//! Navigation over a [`StoryCollection`](storyreel_core::StoryCollection) is a
//! pure function ([`advance`], [`open`]). Everything time-dependent (per-image
//! progress timers, slide transition delays, image load completion) is a
//! spawned task posting [`PlaybackEvent`]s into one channel, and the
//! [`PlaybackOrchestrator`] applies them one at a time to the open
//! [`PlaybackSession`]. Events from cancelled tasks carry stale ids and are
//! dropped on receipt.
//!
//! Hosts implement [`PlaybackHost`] to hear about committed navigation and
//! [`ImageLoader`] to gate each image's timer on its content being ready.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod host;
pub mod navigation;
mod orchestrator;
mod schedule;
mod session;
mod timer;
mod view;
mod viewed;

pub(crate) use event::channel;
pub use event::{EventSender, LoadTicket, PlaybackEvent, TapZone, TaskId};
pub use host::{ImageLoader, ImmediateLoader, NoopHost, PlaybackHost};
pub use navigation::{advance, open};
pub use orchestrator::PlaybackOrchestrator;
pub use schedule::{LoadRequest, LoadSignal, ScheduledTask, Scheduler};
pub use session::PlaybackSession;
pub use timer::PlaybackTimer;
pub use view::PlayerView;
pub use viewed::ViewedTracker;
