//! Working palette: the ordered set of colors a pattern draws from.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// An ordered set of unique colors.
///
/// Insertion order is preserved for display; adding a color already present
/// is a no-op rather than an error, mirroring how a picker behaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<RgbColor>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Creates a palette from a list of colors, dropping duplicates while
    /// keeping first-seen order.
    #[must_use]
    pub fn from_colors(colors: impl IntoIterator<Item = RgbColor>) -> Self {
        let mut palette = Self::new();
        for color in colors {
            palette.add(color);
        }
        palette
    }

    /// Adds a color. Returns `true` if it was inserted, `false` if it was
    /// already present (duplicate add is a no-op).
    pub fn add(&mut self, color: RgbColor) -> bool {
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Removes a color by value. Returns `true` if it was present.
    pub fn remove(&mut self, color: &RgbColor) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| c != color);
        self.colors.len() != before
    }

    /// Replaces the color at `index`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when the index is out of range
    /// or the new color already sits elsewhere in the palette.
    pub fn replace_at(&mut self, index: usize, color: RgbColor) -> bool {
        if index >= self.colors.len() {
            return false;
        }
        if self.colors[index] != color && self.colors.contains(&color) {
            return false;
        }
        self.colors[index] = color;
        true
    }

    /// Removes every color.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Whether the palette contains the given color.
    #[must_use]
    pub fn contains(&self, color: &RgbColor) -> bool {
        self.colors.contains(color)
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in insertion order.
    #[must_use]
    pub fn colors(&self) -> &[RgbColor] {
        &self.colors
    }

    /// Color at the given display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RgbColor> {
        self.colors.get(index)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a RgbColor;
    type IntoIter = std::slice::Iter<'a, RgbColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
