use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::app::{App, Screen};
use super::input::Input;
use super::tiles::TileId;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    match app.screen {
        Screen::Auth => handle_auth_key(app, key, ctrl),
        Screen::Tiles => handle_tiles_key(app, key),
        Screen::Section(TileId::Feed) => handle_feed_key(app, key, ctrl),
        Screen::Section(TileId::Profile) => handle_profile_key(app, key, ctrl),
        Screen::Section(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.back(),
            _ => {}
        },
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.auth.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.auth.focus_prev(),
        KeyCode::F(2) => app.auth.toggle_mode(),
        KeyCode::Enter => app.submit_auth(),
        KeyCode::Esc => app.status = None,
        _ if !ctrl => edit_input(app.auth.focused_mut(), key),
        _ => {}
    }
}

fn handle_tiles_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => app.select_next_tile(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => app.select_prev_tile(),
        KeyCode::Enter => app.open_selected_tile(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        _ => {}
    }
}

fn handle_feed_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    if ctrl {
        match key.code {
            KeyCode::Char('l') => app.like_selected(),
            KeyCode::Char('r') => app.refresh_feed(),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Esc => app.back(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Up => app.feed.move_up(),
        KeyCode::Down => app.feed.move_down(),
        _ => edit_input(&mut app.feed.draft, key),
    }
}

fn handle_profile_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('o') if ctrl => app.logout(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn edit_input(input: &mut Input, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}
