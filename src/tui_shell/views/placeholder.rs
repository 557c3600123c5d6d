use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui_shell::tiles::Tile;

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, tile: &Tile) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", tile.label));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pad = inner.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(Line::raw(tile.glyph));
    lines.push(Line::styled(
        "This section is under construction",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
