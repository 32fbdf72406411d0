//! Yarn stash records parsed from an inventory spreadsheet.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// A single yarn from the user's stash.
///
/// Records are created in bulk when an inventory file is parsed and replaced
/// wholesale on re-upload; they are never edited individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YarnRecord {
    /// Identifier from the `No` column, or a synthetic `yarn_<row>` value.
    pub id: String,
    /// Display name (e.g., "Periwinkle").
    pub name: String,
    /// Yarn color. Rows without a color value get the placeholder gray.
    pub color: RgbColor,
    /// Number of skeins on hand.
    pub quantity: u32,
    /// Weight-class label, free text (e.g., "light DK", "Medium worsted").
    pub weight: String,
    /// Skein size label.
    pub size: String,
    /// Category carried over from the nearest preceding header row, if any.
    pub category: Option<String>,
}

impl YarnRecord {
    /// Creates a record with the defaults applied to absent spreadsheet
    /// fields: quantity 1, placeholder color, "Unknown" weight and size.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: RgbColor::default(),
            quantity: 1,
            weight: "Unknown".to_string(),
            size: "Unknown".to_string(),
            category: None,
        }
    }

    /// Short one-line label for list views: name plus hex color.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let yarn = YarnRecord::new("yarn_3", "Cherry");
        assert_eq!(yarn.id, "yarn_3");
        assert_eq!(yarn.name, "Cherry");
        assert_eq!(yarn.color, RgbColor::default());
        assert_eq!(yarn.quantity, 1);
        assert_eq!(yarn.weight, "Unknown");
        assert_eq!(yarn.size, "Unknown");
        assert_eq!(yarn.category, None);
    }

    #[test]
    fn test_display_label() {
        let mut yarn = YarnRecord::new("1.1", "Water");
        yarn.color = RgbColor::new(0xb0, 0xe0, 0xe6);
        assert_eq!(yarn.display_label(), "Water (#b0e0e6)");
    }
}
