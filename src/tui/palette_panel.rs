//! Working palette panel: swatches with selection.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Palette;
use crate::tui::Theme;

/// Palette panel widget.
pub struct PalettePanel;

impl PalettePanel {
    /// Renders the palette with the cursor on `selected`.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        palette: &Palette,
        selected: usize,
        focused: bool,
        theme: &Theme,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.primary)
        };

        let title = if palette.is_empty() {
            " Palette ".to_string()
        } else {
            format!(" Palette ({}) ", palette.len())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut lines: Vec<Line> = Vec::new();

        if palette.is_empty() {
            lines.push(Line::from(Span::styled(
                "Add some colors to get started",
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::from(Span::styled(
                "a: picker | x: hex | o: extract from image",
                Style::default().fg(theme.text_muted),
            )));
        }

        for (index, color) in palette.colors().iter().enumerate() {
            let is_selected = focused && index == selected;
            let marker = if is_selected { "> " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(
                    "\u{2588}\u{2588}\u{2588} ",
                    Style::default().fg(color.to_ratatui_color()),
                ),
                Span::styled(color.to_hex(), label_style),
            ]));
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
