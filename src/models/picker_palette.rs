//! Curated color palette backing the TUI color picker.
//!
//! Twelve yarn-friendly base hues with five shades each, embedded as JSON.

use serde::Deserialize;

use super::RgbColor;

/// The complete picker palette.
#[derive(Debug, Clone, Deserialize)]
pub struct PickerPalette {
    /// The list of base colors in the palette.
    pub colors: Vec<PickerColor>,
}

/// A single base hue with multiple shades.
#[derive(Debug, Clone, Deserialize)]
pub struct PickerColor {
    /// Display name of the hue (e.g., "Teal").
    pub name: String,
    /// Shades from light to dark.
    pub shades: Vec<Shade>,
}

/// A single shade of a base hue.
#[derive(Debug, Clone, Deserialize)]
pub struct Shade {
    /// Shade level (100, 300, 500, 700, 900).
    pub level: u16,
    /// The shade's color value.
    pub color: RgbColor,
}

impl PickerColor {
    /// The "primary" shade (500 level, or the middle shade).
    #[must_use]
    pub fn primary_shade(&self) -> Option<&Shade> {
        self.shades
            .iter()
            .find(|s| s.level == 500)
            .or_else(|| self.shades.get(self.shades.len() / 2))
    }

    /// Shade by index.
    #[must_use]
    pub fn shade_at(&self, index: usize) -> Option<&Shade> {
        self.shades.get(index)
    }

    /// Number of shades.
    #[must_use]
    pub fn shade_count(&self) -> usize {
        self.shades.len()
    }
}

impl PickerPalette {
    /// Load the picker palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/picker_palette.json");
        let palette: Self = serde_json::from_str(json_data)?;
        Ok(palette)
    }

    /// Base hue by index.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<&PickerColor> {
        self.colors.get(index)
    }

    /// Number of base hues.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of columns for display (4 hues per row).
    #[must_use]
    pub const fn columns(&self) -> usize {
        4
    }

    /// Number of display rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.colors.len().div_ceil(self.columns())
    }

    /// The palette entry closest to `target`, as (hue index, shade index).
    ///
    /// Used to pre-select the picker cursor when editing an existing color.
    #[must_use]
    pub fn closest_to(&self, target: RgbColor) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_distance = u32::MAX;

        for (ci, color) in self.colors.iter().enumerate() {
            for (si, shade) in color.shades.iter().enumerate() {
                let distance = shade.color.distance_squared(&target);
                if distance < best_distance {
                    best_distance = distance;
                    best = (ci, si);
                }
            }
        }

        best
    }
}

impl Default for PickerPalette {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { colors: Vec::new() })
    }
}
