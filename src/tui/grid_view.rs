//! Terminal rendering of the generated pattern grid.
//!
//! Each motif is drawn as nested rectangles of background color. Ring
//! membership for a character cell comes from its distance to the nearest
//! motif edge, scaled to the ring count, which reproduces the concentric
//! look of the exported PNG at terminal resolution.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{GridCell, PatternGrid};
use crate::tui::Theme;

/// Grid view widget.
pub struct GridView;

impl GridView {
    /// Renders the generated grid, or a placeholder when nothing has been
    /// generated yet.
    pub fn render(f: &mut Frame, area: Rect, grid: Option<&PatternGrid>, theme: &Theme) {
        let block = Block::default()
            .title(" Pattern ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let Some(grid) = grid else {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    "No pattern generated yet",
                    Style::default().fg(theme.text_secondary),
                )),
                Line::from(Span::styled(
                    "Pick colors on the left, then press g to generate",
                    Style::default().fg(theme.text_muted),
                )),
            ];
            f.render_widget(
                Paragraph::new(lines).block(block).centered(),
                area,
            );
            return;
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        if inner_width == 0 || inner_height == 0 {
            f.render_widget(block, area);
            return;
        }

        // Terminal cells are roughly twice as tall as wide; use a 2:1
        // width:height ratio per motif so squares look square.
        let cell_width = (inner_width / grid.columns).clamp(2, 16);
        let cell_height = (inner_height / grid.rows).clamp(1, 8);

        let mut lines: Vec<Line> = Vec::with_capacity(grid.rows * cell_height);
        for row in 0..grid.rows {
            for char_row in 0..cell_height {
                let mut spans: Vec<Span> = Vec::with_capacity(grid.columns);
                for column in 0..grid.columns {
                    if let Some(cell) = grid.cell(row, column) {
                        spans.extend(motif_row(cell, char_row, cell_width, cell_height));
                    }
                }
                lines.push(Line::from(spans));
            }
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Builds the spans for one character row of one motif.
fn motif_row(cell: &GridCell, char_row: usize, width: usize, height: usize) -> Vec<Span<'static>> {
    let rings = cell.rings();
    if rings.is_empty() {
        return vec![Span::raw(" ".repeat(width))];
    }

    let mut spans = Vec::with_capacity(width);
    for char_col in 0..width {
        let ring = ring_at(char_col, char_row, width, height, rings.len());
        // ring 0 is the outermost band; ring colors are innermost-first
        let color = rings[rings.len() - 1 - ring];
        spans.push(Span::styled(
            " ",
            Style::default().bg(color.to_ratatui_color()),
        ));
    }
    spans
}

/// Ring index (0 = outermost) for a character position within a motif.
fn ring_at(x: usize, y: usize, width: usize, height: usize, ring_count: usize) -> usize {
    // Normalized distance to the nearest edge, 0.0 at the border and 1.0
    // at the center, per axis
    let half_w = (width as f32) / 2.0;
    let half_h = (height as f32) / 2.0;
    let dx = (x as f32 + 0.5).min(width as f32 - (x as f32 + 0.5)) / half_w;
    let dy = (y as f32 + 0.5).min(height as f32 - (y as f32 + 0.5)) / half_h;
    let depth = dx.min(dy);

    ((depth * ring_count as f32) as usize).min(ring_count - 1)
}
