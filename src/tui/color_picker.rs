//! Color picker popup backed by the curated picker palette.
//!
//! Navigation happens in two stages: pick a base hue from the grid, then a
//! shade from the row below. Free-form colors go through the hex prompt
//! instead; this picker covers the common case of grabbing a pleasant shade
//! quickly.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{PickerPalette, RgbColor};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// Focus within the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerFocus {
    /// Selecting the base hue.
    #[default]
    Hues,
    /// Selecting the shade.
    Shades,
}

/// State for the color picker popup.
#[derive(Debug, Clone)]
pub struct ColorPickerState {
    /// Selected base hue index.
    pub selected_hue: usize,
    /// Selected shade index.
    pub selected_shade: usize,
    /// Current focus (hue grid or shade row).
    pub focus: PickerFocus,
    /// The palette data.
    pub palette: PickerPalette,
}

impl ColorPickerState {
    /// Creates a picker with the default selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected_hue: 0,
            selected_shade: 2, // Middle shade (500 level)
            focus: PickerFocus::Hues,
            palette: PickerPalette::default(),
        }
    }

    /// Creates a picker pre-positioned on the palette entry closest to
    /// `color`.
    #[must_use]
    pub fn with_color(color: RgbColor) -> Self {
        let palette = PickerPalette::default();
        let (hue, shade) = palette.closest_to(color);
        Self {
            selected_hue: hue,
            selected_shade: shade,
            focus: PickerFocus::Hues,
            palette,
        }
    }

    /// The currently highlighted color, if the palette has entries.
    #[must_use]
    pub fn current_color(&self) -> Option<RgbColor> {
        let hue = self.palette.color_at(self.selected_hue)?;
        Some(hue.shade_at(self.selected_shade)?.color)
    }

    fn move_hue(&mut self, delta_row: isize, delta_col: isize) {
        let count = self.palette.color_count();
        if count == 0 {
            return;
        }
        let columns = self.palette.columns() as isize;
        let index = self.selected_hue as isize + delta_row * columns + delta_col;
        if index >= 0 && (index as usize) < count {
            self.selected_hue = index as usize;
        }
    }

    fn move_shade(&mut self, delta: isize) {
        let Some(hue) = self.palette.color_at(self.selected_hue) else {
            return;
        };
        let count = hue.shade_count() as isize;
        let index = self.selected_shade as isize + delta;
        if index >= 0 && index < count {
            self.selected_shade = index as usize;
        }
    }
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ColorPickerState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => return Some(ComponentEvent::Cancelled),
            KeyCode::Enter => {
                if let Some(color) = self.current_color() {
                    return Some(ComponentEvent::ColorSelected(color));
                }
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    PickerFocus::Hues => PickerFocus::Shades,
                    PickerFocus::Shades => PickerFocus::Hues,
                };
            }
            KeyCode::Left => match self.focus {
                PickerFocus::Hues => self.move_hue(0, -1),
                PickerFocus::Shades => self.move_shade(-1),
            },
            KeyCode::Right => match self.focus {
                PickerFocus::Hues => self.move_hue(0, 1),
                PickerFocus::Shades => self.move_shade(1),
            },
            KeyCode::Up => {
                if self.focus == PickerFocus::Hues {
                    self.move_hue(-1, 0);
                }
            }
            KeyCode::Down => {
                if self.focus == PickerFocus::Hues {
                    self.move_hue(1, 0);
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Pick a color ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let mut lines: Vec<Line> = Vec::new();

        // Hue grid, palette.columns() names per row
        let columns = self.palette.columns();
        for (row_start, chunk) in self
            .palette
            .colors
            .chunks(columns)
            .enumerate()
            .map(|(i, c)| (i * columns, c))
        {
            let mut spans: Vec<Span> = Vec::new();
            for (offset, hue) in chunk.iter().enumerate() {
                let index = row_start + offset;
                let swatch_color = hue
                    .primary_shade()
                    .map_or(theme.text, |s| s.color.to_ratatui_color());
                let selected = index == self.selected_hue;

                let style = if selected && self.focus == PickerFocus::Hues {
                    Style::default()
                        .fg(theme.active)
                        .add_modifier(Modifier::BOLD)
                } else if selected {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.text)
                };

                spans.push(Span::styled("\u{2588}\u{2588} ", Style::default().fg(swatch_color)));
                spans.push(Span::styled(format!("{:<8}", hue.name), style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());

        // Shade row for the selected hue
        if let Some(hue) = self.palette.color_at(self.selected_hue) {
            let mut spans: Vec<Span> = vec![Span::styled(
                "Shades: ",
                Style::default().fg(theme.text_secondary),
            )];
            for (index, shade) in hue.shades.iter().enumerate() {
                let marker = if index == self.selected_shade {
                    if self.focus == PickerFocus::Shades {
                        "[\u{2588}\u{2588}]"
                    } else {
                        "(\u{2588}\u{2588})"
                    }
                } else {
                    " \u{2588}\u{2588} "
                };
                spans.push(Span::styled(
                    marker,
                    Style::default().fg(shade.color.to_ratatui_color()),
                ));
            }
            if let Some(color) = self.current_color() {
                spans.push(Span::styled(
                    format!("  {}", color.to_hex()),
                    Style::default().fg(theme.text_secondary),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Arrows: move | Tab: hues/shades | Enter: select | Esc: cancel",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
