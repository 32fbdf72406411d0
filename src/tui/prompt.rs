//! Single-line text prompt popup (file paths, hex colors).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{Component, ComponentEvent};
use crate::tui::Theme;

/// What the submitted text will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Path to a cover image to extract colors from.
    ImagePath,
    /// Path to a stash CSV to parse.
    StashPath,
    /// A hex color to add to the palette.
    HexColor,
    /// Book title for the design sheet filename.
    BookTitle,
}

/// State for the text prompt popup.
#[derive(Debug, Clone)]
pub struct PromptState {
    /// Prompt title shown in the popup border.
    pub title: String,
    /// Current input value.
    pub input: String,
    /// What the value is for; the parent dispatches on this.
    pub purpose: PromptPurpose,
}

impl PromptState {
    /// Creates a prompt with the given title and purpose.
    #[must_use]
    pub fn new(title: impl Into<String>, purpose: PromptPurpose) -> Self {
        Self {
            title: title.into(),
            input: String::new(),
            purpose,
        }
    }

    /// Creates a prompt pre-filled with an initial value.
    #[must_use]
    pub fn with_value(
        title: impl Into<String>,
        purpose: PromptPurpose,
        value: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            input: value.into(),
            purpose,
        }
    }
}

impl Component for PromptState {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => Some(ComponentEvent::TextSubmitted(self.input.clone())),
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let content = Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                self.input.as_str(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.text_muted)),
        ]);

        let help = Line::from(Span::styled(
            "Enter: confirm | Esc: cancel",
            Style::default().fg(theme.text_muted),
        ));

        let paragraph = Paragraph::new(vec![content, help]).block(block);
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut prompt = PromptState::new("Add color", PromptPurpose::HexColor);
        for c in "#ffx".chars() {
            assert!(prompt.handle_input(key(KeyCode::Char(c))).is_none());
        }
        prompt.handle_input(key(KeyCode::Backspace));
        assert_eq!(prompt.input, "#ff");
    }

    #[test]
    fn test_enter_submits_current_value() {
        let mut prompt =
            PromptState::with_value("Stash", PromptPurpose::StashPath, "stash.csv");
        match prompt.handle_input(key(KeyCode::Enter)) {
            Some(ComponentEvent::TextSubmitted(value)) => assert_eq!(value, "stash.csv"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = PromptState::new("Image", PromptPurpose::ImagePath);
        assert!(matches!(
            prompt.handle_input(key(KeyCode::Esc)),
            Some(ComponentEvent::Cancelled)
        ));
    }
}
