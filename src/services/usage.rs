//! Yarn usage estimation from weight-class labels.

use crate::models::YarnRecord;

/// Grams per square when no keyword matches.
const DEFAULT_GRAMS_PER_SQUARE: u32 = 5;

/// Weight keywords and their per-square gram costs.
///
/// Checked in order; the first keyword contained in the label wins. The
/// order matters because labels often carry several keywords ("light DK"
/// must classify as light, not DK), so entries must not be reordered.
const WEIGHT_KEYWORDS: [(&str, u32); 4] =
    [("light", 3), ("medium", 5), ("worsted", 7), ("dk", 4)];

/// Grams of yarn one square consumes for the given weight-class label.
#[must_use]
pub fn grams_per_square(weight_label: &str) -> u32 {
    let label = weight_label.to_lowercase();
    WEIGHT_KEYWORDS
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map_or(DEFAULT_GRAMS_PER_SQUARE, |&(_, grams)| grams)
}

/// Estimated total grams of this yarn for a rows x columns grid.
#[must_use]
pub fn estimate_yarn_usage(yarn: &YarnRecord, rows: usize, columns: usize) -> u32 {
    let squares = (rows * columns) as u32;
    grams_per_square(&yarn.weight) * squares
}
