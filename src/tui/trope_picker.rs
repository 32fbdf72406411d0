//! Searchable trope picker popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::TropeCatalog;
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// State for the trope picker popup.
#[derive(Debug, Clone)]
pub struct TropePickerState {
    /// Live search query; filters on name and description.
    pub query: String,
    /// Cursor position within the filtered list.
    pub selected: usize,
    /// The trope catalog.
    pub catalog: TropeCatalog,
}

impl TropePickerState {
    /// Creates a picker over the embedded catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            selected: 0,
            catalog: TropeCatalog::default(),
        }
    }

    /// Names of tropes matching the current query.
    #[must_use]
    pub fn filtered(&self) -> Vec<&crate::models::Trope> {
        self.catalog.search(&self.query)
    }

    fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }
}

impl Default for TropePickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TropePickerState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(ComponentEvent::Cancelled),
            KeyCode::Enter => {
                if let Some(trope) = self.filtered().get(self.selected) {
                    return Some(ComponentEvent::TropeSelected(trope.name.clone()));
                }
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.selected += 1;
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.clamp_selection();
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Book trope ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let mut lines: Vec<Line> = vec![Line::from(vec![
            Span::styled("Search: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                self.query.as_str(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.text_muted)),
        ])];
        lines.push(Line::default());

        let filtered = self.filtered();
        if filtered.is_empty() {
            lines.push(Line::from(Span::styled(
                "No tropes found. Type to search again.",
                Style::default().fg(theme.text_muted),
            )));
        }

        // Show a window of entries around the selection
        let visible = (area.height as usize).saturating_sub(6).max(1);
        let start = self.selected.saturating_sub(visible / 2);
        for (index, trope) in filtered.iter().enumerate().skip(start).take(visible) {
            let style = if index == self.selected {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    "\u{25cf} ",
                    Style::default().fg(trope.color.to_ratatui_color()),
                ),
                Span::styled(trope.name.as_str(), style),
                Span::styled(
                    format!("  {}", trope.description),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Up/Down: move | Enter: select | Esc: cancel",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
