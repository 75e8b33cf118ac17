//! Event handling for TUI.

use crate::{TuiError, TuiErrorKind, TuiResult};
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, MouseEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Tick event for periodic redraws
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized to columns, rows
    Resize(u16, u16),
}

/// Async event source multiplexing terminal input with a redraw tick.
pub struct EventHandler {
    stream: EventStream,
    ticks: Interval,
}

impl EventHandler {
    /// Create a new event handler ticking every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let mut ticks = tokio::time::interval(tick_rate);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            stream: EventStream::new(),
            ticks,
        }
    }

    /// Wait for the next terminal event or tick.
    pub async fn next(&mut self) -> TuiResult<Event> {
        tokio::select! {
            _ = self.ticks.tick() => Ok(Event::Tick),
            event = self.stream.next() => match event {
                Some(Ok(CrosstermEvent::Key(key))) => Ok(Event::Key(key)),
                Some(Ok(CrosstermEvent::Mouse(mouse))) => Ok(Event::Mouse(mouse)),
                Some(Ok(CrosstermEvent::Resize(columns, rows))) => Ok(Event::Resize(columns, rows)),
                Some(Ok(_)) => Ok(Event::Tick),
                Some(Err(e)) => Err(TuiError::new(TuiErrorKind::EventRead(e.to_string()))),
                None => Err(TuiError::new(TuiErrorKind::EventRead(
                    "terminal event stream ended".to_string(),
                ))),
            },
        }
    }
}

impl std::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandler")
            .field("period", &self.ticks.period())
            .finish_non_exhaustive()
    }
}
