//! Key and mouse bindings.
//!
//! Home: `←/→` or `h/l` move through the story ring, `↑/↓` or `j/k` move
//! through the feed, `Enter` watches the selected story, `L` likes the selected
//! post, `c` toggles all of its comments, `q` quits. Player: `←`/`h` previous,
//! `→`/`l`/`Space` next, `Esc`/`q` close, and a click in the left or right third
//! taps that zone.

use crate::{AppMode, Player};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use storyreel_playback::{ImageLoader, PlaybackEvent, TapZone};
use tracing::debug;

/// Apply a key press.
pub fn handle_key<L: ImageLoader>(player: &mut Player<L>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        player.host_mut().app_mut().quit();
        return;
    }
    match player.host().app().mode {
        AppMode::Home => home_key(player, key.code),
        AppMode::Player => player_key(player, key.code),
    }
}

fn home_key<L: ImageLoader>(player: &mut Player<L>, code: KeyCode) {
    let count = player.stories().len();
    let app = player.host_mut().app_mut();
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Left | KeyCode::Char('h') => app.select_previous_story(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_story(count),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_post(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_post(),
        KeyCode::Char('L') => {
            app.toggle_selected_like();
        }
        KeyCode::Char('c') => {
            app.toggle_selected_comments();
        }
        KeyCode::Enter => open_selected(player),
        _ => {}
    }
}

fn player_key<L: ImageLoader>(player: &mut Player<L>, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => player.handle(PlaybackEvent::Tap(TapZone::Previous)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            player.handle(PlaybackEvent::Tap(TapZone::Next))
        }
        KeyCode::Esc | KeyCode::Char('q') => player.handle(PlaybackEvent::Close),
        _ => {}
    }
}

/// Open the story selected in the ring.
pub fn open_selected<L: ImageLoader>(player: &mut Player<L>) {
    let selected = player.host().app().selected_story;
    let Some(id) = player.stories().get(selected).map(|story| story.id) else {
        return;
    };
    player.handle(PlaybackEvent::Open(id));
    let opened = player.is_open();
    let app = player.host_mut().app_mut();
    if opened {
        app.mode = AppMode::Player;
        app.status_message = format!("Watching story {}", id);
    } else {
        debug!(story_id = %id, "Selected story has nothing to play");
        app.status_message = format!("Story {} has nothing to play", id);
    }
}

/// Apply a mouse event; left clicks in the player map to tap zones.
pub fn handle_mouse<L: ImageLoader>(player: &mut Player<L>, mouse: MouseEvent) {
    let app = player.host().app();
    if app.mode != AppMode::Player || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(zone) = TapZone::from_column(mouse.column, app.width) {
        player.handle(PlaybackEvent::Tap(zone));
    }
}
