//! Status bar widget for messages and contextual shortcuts.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::Theme;

/// A transient message shown in the status bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusMessage {
    /// Nothing to report; hints are shown instead.
    #[default]
    Empty,
    /// Informational message (action succeeded).
    Info(String),
    /// Error message (validation or I/O failure).
    Error(String),
}

impl StatusMessage {
    /// Informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info(message.into())
    }

    /// Error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the message line and the shortcut hint line.
    pub fn render(
        f: &mut Frame,
        area: Rect,
        message: &StatusMessage,
        hints: &str,
        busy: Option<&str>,
        theme: &Theme,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.primary));

        let message_line = match message {
            StatusMessage::Empty => {
                busy.map_or_else(Line::default, |label| {
                    Line::from(Span::styled(
                        format!("\u{231b} {label}"),
                        Style::default().fg(theme.warning),
                    ))
                })
            }
            StatusMessage::Info(text) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(theme.success)))
            }
            StatusMessage::Error(text) => Line::from(vec![
                Span::styled("Error: ", Style::default().fg(theme.error)),
                Span::styled(text.clone(), Style::default().fg(theme.text)),
            ]),
        };

        let hint_line = Line::from(Span::styled(
            hints.to_string(),
            Style::default().fg(theme.text_muted),
        ));

        f.render_widget(
            Paragraph::new(vec![message_line, hint_line]).block(block),
            area,
        );
    }
}
