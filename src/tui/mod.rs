//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Option returns for consistency even when a branch
// never emits
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod clipboard;
pub mod color_picker;
pub mod component;
pub mod extraction;
pub mod grid_view;
pub mod help_overlay;
pub mod palette_panel;
pub mod prompt;
pub mod settings_panel;
pub mod state;
pub mod status_bar;
pub mod theme;
pub mod trope_picker;
pub mod yarn_panel;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

// Re-export TUI components
pub use color_picker::ColorPickerState;
pub use component::{Component, ComponentEvent};
pub use grid_view::GridView;
pub use help_overlay::HelpOverlay;
pub use palette_panel::PalettePanel;
pub use settings_panel::SettingsPanel;
pub use state::{AppState, Focus, Popup};
pub use status_bar::{StatusBar, StatusMessage};
pub use theme::Theme;
pub use trope_picker::TropePickerState;
pub use yarn_panel::YarnPanel;

/// Sets up the terminal in raw mode with the alternate screen.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Runs the main TUI loop until the user quits.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout so background jobs stay live
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => state.handle_key(key),
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Apply finished extraction results (stale tokens are discarded)
        state.poll_extraction();

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Renders the whole workspace.
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(outer[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(10)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(62), Constraint::Min(6)])
        .split(columns[1]);

    PalettePanel::render(
        f,
        left[0],
        &state.session.palette,
        state.palette_index,
        state.focus == Focus::Palette,
        theme,
    );
    SettingsPanel::render(
        f,
        left[1],
        &state.session,
        state.setting_field,
        state.extract_count,
        state.focus == Focus::Settings,
        theme,
    );
    GridView::render(f, right[0], state.session.grid.as_ref(), theme);
    YarnPanel::render(
        f,
        right[1],
        &state.session.matches,
        state.match_index,
        state.focus == Focus::Matches,
        theme,
    );

    let busy = state.busy_label();
    StatusBar::render(
        f,
        outer[1],
        &state.status,
        state.hints(),
        busy.as_deref(),
        theme,
    );

    // Popups render on top of everything
    match &state.popup {
        Some(Popup::ColorPicker(picker)) => {
            picker.render(f, centered_rect(60, 40, f.area()), theme);
        }
        Some(Popup::TropePicker(picker)) => {
            picker.render(f, centered_rect(70, 60, f.area()), theme);
        }
        Some(Popup::Prompt(prompt_state)) => {
            prompt_state.render(f, centered_rect(50, 20, f.area()), theme);
        }
        None => {}
    }

    if state.help_visible {
        HelpOverlay::render(f, centered_rect(60, 80, f.area()), theme);
    }
}

/// Computes a centered rectangle taking the given percentages of `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_within_bounds() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(60, 40, area);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
        assert_eq!(rect.width, 60);
        assert_eq!(rect.height, 20);
    }
}
