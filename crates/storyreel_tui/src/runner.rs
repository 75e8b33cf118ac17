//! TUI runner - main loop and terminal integration.

use crate::{App, Event, EventHandler, Player, TuiConfig, TuiError, TuiErrorKind, TuiHost, input};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use storyreel_core::PlaybackConfig;
use storyreel_error::StoryreelResult;
use storyreel_playback::{ImageLoader, PlaybackOrchestrator};
use storyreel_source::{LoadState, StorySource, load_home};
use tracing::{info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Run the interactive player until the user quits.
///
/// Stories and posts are fetched from `source` while a loading screen is
/// shown; a fetch failure is shown in place of the player.
#[instrument(skip_all)]
pub async fn run_tui<L: ImageLoader>(
    source: Box<dyn StorySource>,
    loader: L,
    playback: PlaybackConfig,
    config: &TuiConfig,
) -> StoryreelResult<()> {
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, source, loader, playback, config).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Term, TuiError> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })
}

fn restore_terminal(terminal: &mut Term) -> Result<(), TuiError> {
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })
}

fn draw(terminal: &mut Term, render: impl FnOnce(&mut Frame)) -> Result<(), TuiError> {
    terminal
        .draw(render)
        .map(|_| ())
        .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))
}

fn is_quit(event: &Event) -> bool {
    matches!(event, Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc))
}

async fn run_loop<L: ImageLoader>(
    terminal: &mut Term,
    source: Box<dyn StorySource>,
    loader: L,
    playback: PlaybackConfig,
    config: &TuiConfig,
) -> StoryreelResult<()> {
    let mut events = EventHandler::new(config.frame_rate());

    let loading = tokio::spawn(async move { load_home(source.as_ref()).await });
    tokio::pin!(loading);
    let state = loop {
        draw(terminal, crate::ui::draw_loading)?;
        tokio::select! {
            joined = &mut loading => {
                break joined.unwrap_or_else(|e| LoadState::Failed(format!("Load task failed: {}", e)));
            }
            event = events.next() => {
                if is_quit(&event?) {
                    return Ok(());
                }
            }
        }
    };

    let (stories, feed) = match state {
        LoadState::Ready { stories, feed } => (stories, feed),
        LoadState::Failed(message) => return show_failure(terminal, &mut events, &message).await,
        LoadState::Loading => {
            return show_failure(terminal, &mut events, "Load did not complete").await;
        }
    };

    info!(stories = stories.len(), posts = feed.len(), "Starting player");
    let mut player: Player<L> =
        PlaybackOrchestrator::new(stories, playback, TuiHost::new(App::new(feed)), loader)?;

    while !player.host().app().should_quit {
        let width = terminal
            .size()
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(e.to_string())))?
            .width;
        player.host_mut().app_mut().width = width;
        draw(terminal, |f| crate::ui::draw(f, &player))?;

        tokio::select! {
            event = events.next() => match event? {
                Event::Key(key) => input::handle_key(&mut player, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut player, mouse),
                Event::Resize(..) | Event::Tick => {}
            },
            playback = player.next_event() => player.handle(playback?),
        }
    }

    info!("Quitting player");
    Ok(())
}

async fn show_failure(
    terminal: &mut Term,
    events: &mut EventHandler,
    message: &str,
) -> StoryreelResult<()> {
    loop {
        draw(terminal, |f| crate::ui::draw_failure(f, message))?;
        if is_quit(&events.next().await?) {
            return Ok(());
        }
    }
}
