//! The terminal host seen by the playback engine.

use crate::{App, AppMode};
use storyreel_core::Position;
use storyreel_playback::{PlaybackHost, PlaybackOrchestrator};

/// Playback orchestrator driving the terminal host.
pub type Player<L> = PlaybackOrchestrator<TuiHost, L>;

/// Owns the [`App`] and reflects committed navigation into it.
#[derive(Debug, Clone)]
pub struct TuiHost {
    app: App,
    transitions: usize,
}

impl TuiHost {
    /// Wrap the application state.
    pub fn new(app: App) -> Self {
        Self {
            app,
            transitions: 0,
        }
    }

    /// Application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Mutable application state.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Committed transitions since start.
    pub fn transitions(&self) -> usize {
        self.transitions
    }
}

impl PlaybackHost for TuiHost {
    fn on_close(&mut self) {
        self.app.mode = AppMode::Home;
        self.app.status_message = format!("Closed player after {} transitions", self.transitions);
    }

    fn on_next(&mut self, position: Position) {
        self.transitions += 1;
        self.app.status_message = format!("Next {}", position);
    }

    fn on_previous(&mut self, position: Position) {
        self.transitions += 1;
        self.app.status_message = format!("Previous {}", position);
    }
}
