use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use time::OffsetDateTime;

use crate::model::Post;
use crate::tui_shell::app::App;
use crate::tui_shell::render::{avatar_text, cursor_x};
use crate::tui_shell::time_utils::fmt_post_time;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let [compose, list] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let draft = &app.feed.draft;
    let shown = if draft.buf.is_empty() {
        Line::styled("What's new?", Style::default().fg(Color::DarkGray))
    } else {
        Line::raw(draft.buf.as_str())
    };
    frame.render_widget(
        Paragraph::new(shown).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" New post "),
        ),
        compose,
    );
    frame.set_cursor_position((cursor_x(compose, draft.cursor), compose.y + 1));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Posts ({}) ", app.feed.posts.len()));
    if app.feed.posts.is_empty() {
        let msg = if app.feed.loaded {
            "No posts yet. Be the first!"
        } else {
            "Loading..."
        };
        frame.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block),
            list,
        );
        return;
    }

    let now = OffsetDateTime::now_utc();
    let items: Vec<ListItem> = app
        .feed
        .posts
        .iter()
        .map(|p| ListItem::new(post_text(p, now)))
        .collect();
    let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected(Some(app.feed.selected));
    frame.render_stateful_widget(widget, list, &mut state);
}

fn post_text(post: &Post, now: OffsetDateTime) -> Text<'static> {
    let mut head = vec![
        Span::styled(
            format!("[{}] ", avatar_text(&post.avatar, &post.username)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            post.author().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if post.is_creator {
        head.push(Span::styled(" ✓", Style::default().fg(Color::Magenta)));
    }
    head.push(Span::styled(
        format!("  @{}  {}", post.username, fmt_post_time(&post.created_at, now)),
        Style::default().fg(Color::Gray),
    ));

    let mut lines = vec![Line::from(head)];
    lines.extend(post.content.lines().map(|l| Line::raw(l.to_string())));
    lines.push(Line::from(vec![
        Span::styled(format!("♥ {}", post.likes), Style::default().fg(Color::Red)),
        Span::raw("   "),
        Span::styled(
            format!("✎ {}", post.comments),
            Style::default().fg(Color::Gray),
        ),
    ]));
    lines.push(Line::raw(""));
    Text::from(lines)
}
