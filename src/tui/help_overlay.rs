//! Help overlay listing all keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::Theme;

/// Keyboard reference overlay.
pub struct HelpOverlay;

const SHORTCUTS: [(&str, &str); 20] = [
    ("Tab / Shift+Tab", "Cycle focus between panels"),
    ("Up/Down", "Move within the focused panel"),
    ("a", "Add a color from the picker"),
    ("x", "Add a color by hex code"),
    ("Enter", "Edit the selected palette color"),
    ("u", "Reset an edited color to its extracted value"),
    ("d / Delete", "Remove the selected palette color"),
    ("c", "Copy the selected color's hex code"),
    ("o", "Extract colors from a cover image"),
    ("O", "Load a yarn stash CSV"),
    ("T", "Pick a book trope"),
    ("b", "Set the book title"),
    ("+/-", "Adjust the selected grid setting"),
    ("g", "Generate a grid from the palette"),
    ("G", "Generate a book-inspired grid"),
    ("m / M", "Swap the selected match's yarn"),
    ("e", "Export the pattern PNG"),
    ("E", "Export the design sheet"),
    ("w", "Write a stash template CSV"),
    ("q / Esc", "Quit"),
];

impl HelpOverlay {
    /// Renders the shortcut list.
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Keyboard shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let mut lines: Vec<Line> = Vec::with_capacity(SHORTCUTS.len() + 2);
        for (keys, action) in SHORTCUTS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {keys:<16}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
