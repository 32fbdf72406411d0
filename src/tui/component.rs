//! Component trait pattern for TUI popups.
//!
//! Popup components are self-contained: they manage their own state, handle
//! keyboard input, and emit events for the parent state to apply.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::RgbColor;
use crate::tui::Theme;

/// A popup component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to
    /// the parent; `None` if input was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components and applied by the parent state.
#[derive(Debug, Clone)]
pub enum ComponentEvent {
    /// User picked a color (from the picker palette or hex entry)
    ColorSelected(RgbColor),
    /// User picked a trope by name
    TropeSelected(String),
    /// User submitted a text value (file path prompt)
    TextSubmitted(String),
    /// User dismissed the popup without choosing
    Cancelled,
}
