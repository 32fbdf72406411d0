//! Yarn match panel: extracted colors paired with stash yarns.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ColorMatch;
use crate::tui::Theme;

/// Yarn match panel widget.
pub struct YarnPanel;

impl YarnPanel {
    /// Renders the match list with the cursor on `selected`.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        matches: &[ColorMatch],
        selected: usize,
        focused: bool,
        theme: &Theme,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .title(" Matched yarns ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut lines: Vec<Line> = Vec::new();

        if matches.is_empty() {
            lines.push(Line::from(Span::styled(
                "No yarn matches yet",
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::from(Span::styled(
                "Load a stash (O) and extract colors (o)",
                Style::default().fg(theme.text_muted),
            )));
        }

        for (index, m) in matches.iter().enumerate() {
            let is_selected = focused && index == selected;
            let marker = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(
                    "\u{2588}\u{2588}",
                    Style::default().fg(m.source.to_ratatui_color()),
                ),
                Span::styled(" \u{2192} ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    "\u{2588}\u{2588} ",
                    Style::default().fg(m.yarn.color.to_ratatui_color()),
                ),
                Span::styled(m.yarn.name.clone(), name_style),
                Span::styled(
                    format!(" d={:.1}", m.distance),
                    Style::default().fg(theme.text_secondary),
                ),
                Span::styled(
                    format!(" ({} skeins)", m.yarn.quantity),
                    Style::default().fg(theme.text_muted),
                ),
            ]));

            if is_selected {
                lines.push(Line::from(Span::styled(
                    format!(
                        "    {} \u{00b7} size {} \u{00b7} m/M: swap yarn",
                        m.yarn.weight, m.yarn.size
                    ),
                    Style::default().fg(theme.text_muted),
                )));
            }
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
