//! Pairing of an extracted color with its nearest stash yarn.

use crate::models::{RgbColor, YarnRecord};
use serde::{Deserialize, Serialize};

/// One source color paired with the yarn chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatch {
    /// The color extracted from the book cover (or picked by hand).
    pub source: RgbColor,
    /// The yarn currently assigned to this color.
    pub yarn: YarnRecord,
    /// Distance between `source` and the yarn color as last computed
    /// automatically. A manual override replaces the yarn without updating
    /// this value, so after an override it describes the original match,
    /// not the current one.
    pub distance: f64,
}

impl ColorMatch {
    /// Creates a match with a freshly computed distance.
    #[must_use]
    pub fn new(source: RgbColor, yarn: YarnRecord) -> Self {
        let distance = source.distance(&yarn.color);
        Self {
            source,
            yarn,
            distance,
        }
    }

    /// Replaces the matched yarn with a user-chosen one.
    ///
    /// The distance field is intentionally left untouched.
    pub fn override_yarn(&mut self, yarn: YarnRecord) {
        self.yarn = yarn;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_distance() {
        let mut yarn = YarnRecord::new("1", "Scarlet");
        yarn.color = RgbColor::new(255, 0, 0);

        let m = ColorMatch::new(RgbColor::new(255, 0, 0), yarn);
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn test_override_keeps_distance() {
        let mut near = YarnRecord::new("1", "Scarlet");
        near.color = RgbColor::new(254, 0, 1);
        let mut far = YarnRecord::new("2", "Sky");
        far.color = RgbColor::new(0, 0, 255);

        let mut m = ColorMatch::new(RgbColor::new(255, 0, 0), near);
        let before = m.distance;

        m.override_yarn(far.clone());
        assert_eq!(m.yarn, far);
        assert_eq!(m.distance, before);
    }
}
