//! Per-image countdown driving progress ticks and one auto-advance.

use crate::{EventSender, PlaybackEvent, ScheduledTask, Scheduler, TaskId};
use storyreel_core::PlaybackConfig;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, instrument};

/// Running countdown for the displayed image.
///
/// While active it posts `TimerTick` every tick interval with progress derived
/// from elapsed time, then exactly one `TimerExpired` at the display duration.
#[derive(Debug)]
pub struct PlaybackTimer {
    task: ScheduledTask,
}

impl PlaybackTimer {
    /// Start a timer for the current image.
    #[instrument(skip(scheduler))]
    pub fn start(scheduler: &mut Scheduler) -> Self {
        let id = scheduler.task_id();
        let config = scheduler.config().clone();
        let sender = scheduler.sender().clone();
        let started_at = Instant::now();
        let duration = config.image_duration();

        debug!(timer = %id, ?duration, "Starting playback timer");
        let task = ScheduledTask::spawn(id, run(id, started_at, config, sender));

        Self { task }
    }

    /// Identity stamped on this timer's events.
    pub fn id(&self) -> TaskId {
        self.task.id()
    }

    /// Stop ticks and expiry. Consumes the timer.
    pub fn cancel(self) {
        self.task.cancel();
    }
}

async fn run(id: TaskId, started_at: Instant, config: PlaybackConfig, sender: EventSender) {
    let tick = config.tick_interval();
    let expiry = tokio::time::sleep_until(started_at + config.image_duration());
    tokio::pin!(expiry);

    let mut ticks = tokio::time::interval_at(started_at + tick, tick);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            () = &mut expiry => {
                sender.send(PlaybackEvent::TimerExpired { timer: id });
                break;
            }
            _ = ticks.tick() => {
                let progress = config.progress_at(started_at.elapsed());
                if !sender.send(PlaybackEvent::TimerTick { timer: id, progress }) {
                    break;
                }
            }
        }
    }
}
