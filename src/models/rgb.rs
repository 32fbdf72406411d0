//! RGB color handling with hex parsing and color distance.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parsing is strict: exactly six hex digits with an optional leading `#`.
/// Anything else parses to `None` rather than an error, so callers decide
/// how to handle malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Accepts `#rrggbb` or `rrggbb`, hex digits in either case. Any other
    /// shape (short form, extra characters, non-hex digits) yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grannygrid::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#ff0000"), Some(RgbColor::new(255, 0, 0)));
    /// assert_eq!(RgbColor::from_hex("00FF00"), Some(RgbColor::new(0, 255, 0)));
    /// assert_eq!(RgbColor::from_hex("#fff"), None);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format `#rrggbb` (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use grannygrid::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance between two colors in RGB space.
    ///
    /// Cheaper than [`distance`](Self::distance) when only the ordering
    /// matters (nearest-color scans).
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// Zero for identical colors, symmetric in its arguments, at most
    /// `sqrt(3 * 255^2)` (~441.7) for opposite corners of the cube.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    /// Distance between two hex strings, or `None` if either fails to parse.
    ///
    /// An absent result is deliberately distinct from a large distance:
    /// rankings must skip unparseable colors instead of sorting them last.
    #[must_use]
    pub fn try_distance_hex(a: &str, b: &str) -> Option<f64> {
        Some(Self::from_hex(a)?.distance(&Self::from_hex(b)?))
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is the placeholder gray (#cccccc) used for yarn rows
    /// with no color value.
    fn default() -> Self {
        Self::new(0xcc, 0xcc, 0xcc)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid hex color '{s}'")))
    }
}
