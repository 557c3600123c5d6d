use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::User;
use crate::tui_shell::render::avatar_text;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, user: Option<&User>) {
    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    let Some(user) = user else {
        frame.render_widget(Paragraph::new("Not logged in").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::Gray);
    let row = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), label),
            Span::raw(value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "[{}] {}",
                avatar_text(&user.avatar, &user.username),
                user.display_name()
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        row("username", format!("@{}", user.username)),
        row("email", user.email.clone()),
        row("id", user.id.to_string()),
    ];
    if user.is_creator {
        lines.push(row("badge", "creator ✓".to_string()));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
