use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui_shell::tiles::{TILES, Tile, TileSize};

const SMALL_PER_ROW: usize = 3;

/// Large tiles get a row of their own; small tiles share rows.
pub(in crate::tui_shell) fn tile_rows() -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    for (i, t) in TILES.iter().enumerate() {
        match t.size {
            TileSize::Large => {
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                }
                rows.push(vec![i]);
            }
            TileSize::Small => {
                current.push(i);
                if current.len() == SMALL_PER_ROW {
                    rows.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

pub(in crate::tui_shell) fn render(frame: &mut ratatui::Frame, area: Rect, selected: usize) {
    let rows = tile_rows();
    let heights: Vec<Constraint> = rows
        .iter()
        .map(|r| match TILES[r[0]].size {
            TileSize::Large => Constraint::Fill(2),
            TileSize::Small => Constraint::Fill(1),
        })
        .collect();
    let row_areas = Layout::vertical(heights).split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cols = Layout::horizontal(row.iter().map(|_| Constraint::Fill(1))).split(*row_area);
        for (idx, col_area) in row.iter().zip(cols.iter()) {
            render_tile(frame, *col_area, &TILES[*idx], *idx == selected);
        }
    }
}

fn render_tile(frame: &mut ratatui::Frame, area: Rect, tile: &Tile, selected: bool) {
    let color = match tile.size {
        TileSize::Large => Color::Magenta,
        TileSize::Small => Color::Blue,
    };
    let (border_type, border_style) = if selected {
        (
            BorderType::Thick,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(color))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pad = inner.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled(tile.glyph, Style::default().fg(color))));
    lines.push(Line::from(Span::styled(
        tile.label,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
#[path = "../../tests/tui_shell/tiles_view_tests.rs"]
mod tests;
