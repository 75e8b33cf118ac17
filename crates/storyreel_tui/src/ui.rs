//! UI rendering for TUI.

use crate::{App, AppMode, COMMENT_PREVIEW, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use storyreel_core::{Direction, Post, StoryCollection};
use storyreel_playback::{ImageLoader, PlayerView};

/// Draw the home screen or the player, depending on mode.
#[tracing::instrument(skip_all)]
pub fn draw<L: ImageLoader>(f: &mut Frame, player: &Player<L>) {
    let app = player.host().app();
    match (app.mode, player.view()) {
        (AppMode::Player, Some(view)) => draw_player(f, app, &view),
        _ => draw_home(f, app, player.stories()),
    }
}

/// Draw the loading screen shown while stories and posts are fetched.
pub fn draw_loading(f: &mut Frame) {
    let text = Paragraph::new("Loading stories...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title("storyreel"));
    f.render_widget(text, f.area());
}

/// Draw the failure screen with the load error.
pub fn draw_failure(f: &mut Frame, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press q to quit"),
    ];
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("storyreel"));
    f.render_widget(text, f.area());
}

fn draw_home(f: &mut Frame, app: &App, stories: &StoryCollection) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Story ring
            Constraint::Min(0),    // Feed
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_ring(f, app, stories, chunks[0]);
    draw_feed(f, app, chunks[1]);
    draw_status_bar(
        f,
        app,
        "←→: Stories | ↑↓: Posts | Enter: Watch | L: Like | C: Comments | Q: Quit",
        chunks[2],
    );
}

fn draw_ring(f: &mut Frame, app: &App, stories: &StoryCollection, area: Rect) {
    let spans: Vec<Span> = stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let (marker, color) = if story.viewed {
                ("○", Color::DarkGray)
            } else {
                ("●", Color::Magenta)
            };
            let mut style = Style::default().fg(color);
            if i == app.selected_story {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            Span::styled(format!(" {} {} ", marker, story.username), style)
        })
        .collect();

    let title = format!("Stories ({} new)", stories.unviewed_count());
    let ring = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(ring, area);
}

fn post_card(post: &Post, expanded: bool) -> ListItem<'static> {
    let heart = if post.liked {
        Span::styled("♥", Style::default().fg(Color::Red))
    } else {
        Span::raw("♡")
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(post.username.clone(), bold),
            Span::styled(format!(" · {}", post.timestamp), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("[image: {}]", post.image),
            Style::default().fg(Color::Blue),
        )),
        Line::from(vec![
            heart,
            Span::raw(format!(" {} likes", post.likes)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", post.username), bold),
            Span::raw(post.caption.clone()),
        ]),
    ];
    if post.has_more_comments(COMMENT_PREVIEW) && !expanded {
        lines.push(Line::from(Span::styled(
            format!("View all {} comments (c)", post.comments.len()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let comments = if expanded {
        &post.comments[..]
    } else {
        post.preview_comments(COMMENT_PREVIEW)
    };
    for comment in comments {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", comment.username), bold),
            Span::raw(comment.text.clone()),
        ]));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_feed(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .feed
        .posts()
        .iter()
        .map(|post| post_card(post, app.is_expanded(post.id)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Feed"))
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));

    let mut state = ListState::default();
    if !app.feed.is_empty() {
        state.select(Some(app.selected_post));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_player(f: &mut Frame, app: &App, view: &PlayerView) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1), // Progress segments
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Image
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_segments(f, view, chunks[0]);

    let slide = match view.slide() {
        Some(Direction::Forward) => " ▶",
        Some(Direction::Backward) => " ◀",
        None => "",
    };
    let header = Line::from(vec![
        Span::styled(view.username().clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}/{}{}", view.image_index() + 1, view.image_count(), slide),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[1]);

    let mut body = vec![Line::from(Span::styled(
        view.image().clone(),
        Style::default().fg(Color::Cyan),
    ))];
    if *view.loading() {
        body.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )));
    }
    let image = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(image, chunks[2]);

    draw_status_bar(f, app, "←: Previous | →/Space: Next | Esc: Close", chunks[3]);
}

fn draw_segments(f: &mut Frame, view: &PlayerView, area: Rect) {
    let count = view.segments().len().max(1) as u32;
    let constraints: Vec<Constraint> = view
        .segments()
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let cells = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for (fill, cell) in view.segments().iter().zip(cells.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
            .percent(u16::from((*fill).min(100)))
            .label("");
        f.render_widget(gauge, *cell);
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, help_text: &str, area: Rect) {
    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
