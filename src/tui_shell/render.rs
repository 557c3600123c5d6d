use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{App, Screen, StatusKind};
use super::tiles::{TileId, tile};
use super::views;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(if app.status.is_some() { 3 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.screen {
        Screen::Auth => views::auth_form::render(frame, chunks[1], &app.auth),
        Screen::Tiles => views::tiles::render(frame, chunks[1], app.tile_selected),
        Screen::Section(TileId::Feed) => views::feed::render(frame, chunks[1], app),
        Screen::Section(TileId::Profile) => {
            views::profile::render(frame, chunks[1], app.user.as_ref())
        }
        Screen::Section(id) => views::placeholder::render(frame, chunks[1], tile(id)),
    }

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        let p = Paragraph::new(status.text.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(p, chunks[2]);
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        key_hints(app.screen),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints, chunks[3]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![Span::styled(
        " FIH ",
        Style::default().fg(Color::Black).bg(Color::Magenta),
    )];
    if let Screen::Section(id) = app.screen {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(tile(id).label, Style::default().fg(Color::Yellow)));
    }
    if let Some(user) = &app.user {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}] @{}", avatar_text(&user.avatar, &user.username), user.username),
            Style::default().fg(Color::Cyan),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Stored avatar initials, or the first two letters of the username upper-cased.
pub(super) fn avatar_text(avatar: &str, username: &str) -> String {
    let avatar = avatar.trim();
    if !avatar.is_empty() {
        return avatar.to_string();
    }
    username.chars().take(2).collect::<String>().to_uppercase()
}

/// Column for a text cursor inside a bordered one-line box, kept inside the border.
pub(super) fn cursor_x(area: ratatui::layout::Rect, cursor: usize) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Auth => "tab next field  F2 login/register  enter submit  ctrl-c quit",
        Screen::Tiles => "arrows select  enter open  q quit",
        Screen::Section(TileId::Feed) => {
            "type to draft  enter publish  up/down select  ctrl-l like  ctrl-r refresh  esc back"
        }
        Screen::Section(TileId::Profile) => "ctrl-o log out  esc back",
        Screen::Section(_) => "esc back",
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
