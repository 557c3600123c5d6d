use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui_shell::app::{AuthField, AuthForm, AuthMode};
use crate::tui_shell::render::cursor_x;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, form: &AuthForm) {
    let title = match form.mode {
        AuthMode::Login => " Log in ",
        AuthMode::Register => " Create account ",
    };
    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let fields = form.fields();
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(inner);

    for (i, field) in fields.iter().enumerate() {
        let input = form.input(*field);
        let focused = *field == form.focus;
        let shown = if *field == AuthField::Password {
            input.masked()
        } else {
            input.buf.clone()
        };
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let p = Paragraph::new(shown).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(field.label()),
        );
        frame.render_widget(p, rows[i]);

        if focused {
            frame.set_cursor_position((cursor_x(rows[i], input.cursor), rows[i].y + 1));
        }
    }

    let switch = match form.mode {
        AuthMode::Login => "No account yet? Press F2 to register.",
        AuthMode::Register => "Already registered? Press F2 to log in.",
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        switch,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(footer, rows[fields.len()]);
}
