//! Grid settings panel: dimensions, colors per square, book metadata.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{SessionState, MAX_RINGS};
use crate::tui::Theme;

/// Which setting the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingField {
    /// Grid rows.
    #[default]
    Rows,
    /// Grid columns.
    Columns,
    /// Colors per square.
    ColorsPerSquare,
    /// How many colors an image extraction asks for.
    ExtractColors,
}

impl SettingField {
    /// The next field, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Rows => Self::Columns,
            Self::Columns => Self::ColorsPerSquare,
            Self::ColorsPerSquare => Self::ExtractColors,
            Self::ExtractColors => Self::Rows,
        }
    }

    /// The previous field, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Rows => Self::ExtractColors,
            Self::Columns => Self::Rows,
            Self::ColorsPerSquare => Self::Columns,
            Self::ExtractColors => Self::ColorsPerSquare,
        }
    }
}

/// Settings panel widget.
pub struct SettingsPanel;

impl SettingsPanel {
    /// Renders the settings with the cursor on `field`.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        session: &SessionState,
        field: SettingField,
        extract_count: usize,
        focused: bool,
        theme: &Theme,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .title(" Grid settings ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let settings = &session.grid_settings;
        let max_colors = MAX_RINGS.min(session.palette.len().max(1));

        let row_line = |label: &str, value: String, active: bool| {
            let marker = if focused && active { "> " } else { "  " };
            let style = if focused && active {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
                Span::styled(format!("{label:<18}"), Style::default().fg(theme.text_secondary)),
                Span::styled(value, style),
            ])
        };

        let mut lines = vec![
            row_line(
                "Rows:",
                format!("{} (1-20)", settings.rows),
                field == SettingField::Rows,
            ),
            row_line(
                "Columns:",
                format!("{} (1-20)", settings.columns),
                field == SettingField::Columns,
            ),
            row_line(
                "Colors/square:",
                format!("{} (1-{max_colors})", settings.colors_per_square),
                field == SettingField::ColorsPerSquare,
            ),
            row_line(
                "Extract colors:",
                format!("{extract_count} (3-8)"),
                field == SettingField::ExtractColors,
            ),
            Line::default(),
        ];

        // Book workflow summary
        if session.book.trope.is_empty() {
            lines.push(Line::from(Span::styled(
                "No trope selected (T to pick)",
                Style::default().fg(theme.text_muted),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled("Trope: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    "\u{25cf} ",
                    Style::default().fg(session.book.trope_color.to_ratatui_color()),
                ),
                Span::styled(
                    session.book.trope.as_str(),
                    Style::default().fg(theme.text),
                ),
            ]));
        }

        if !session.book.title.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Title: ", Style::default().fg(theme.text_secondary)),
                Span::styled(session.book.title.as_str(), Style::default().fg(theme.text)),
            ]));
        }

        let stash_label = if session.stash.is_empty() {
            "No stash loaded (O to load a CSV)".to_string()
        } else {
            format!("{} yarn(s) in stash", session.stash.len())
        };
        lines.push(Line::from(Span::styled(
            stash_label,
            Style::default().fg(theme.text_muted),
        )));

        lines.push(Line::from(Span::styled(
            format!(
                "Your grid will have {} squares",
                settings.rows * settings.columns
            ),
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_round_trip() {
        let mut field = SettingField::Rows;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, SettingField::Rows);

        assert_eq!(SettingField::Rows.previous(), SettingField::ExtractColors);
        assert_eq!(SettingField::ExtractColors.next(), SettingField::Rows);
    }
}
