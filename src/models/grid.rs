//! Pattern grid: a matrix of nested-square motifs.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// Maximum number of concentric rings rendered per motif.
///
/// Cells may carry more colors; renderers ignore everything past this.
pub const MAX_RINGS: usize = 10;

/// One granny square motif: colors ordered innermost ring first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Ring colors from the center outward. The last entry is the border
    /// of the square.
    pub colors: Vec<RgbColor>,
}

impl GridCell {
    /// Creates a cell from ring colors (innermost first).
    #[must_use]
    pub fn new(colors: Vec<RgbColor>) -> Self {
        Self { colors }
    }

    /// Ring colors capped at [`MAX_RINGS`], innermost first.
    #[must_use]
    pub fn rings(&self) -> &[RgbColor] {
        let count = self.colors.len().min(MAX_RINGS);
        &self.colors[..count]
    }

    /// The outermost rendered ring color, if the cell has any.
    #[must_use]
    pub fn outer_color(&self) -> Option<&RgbColor> {
        self.rings().last()
    }
}

/// A rows x columns matrix of motifs.
///
/// Grids are regenerated wholesale on every generate action; there is no
/// incremental patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternGrid {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Cells in row-major order, `rows * columns` entries.
    cells: Vec<GridCell>,
}

impl PatternGrid {
    /// Builds a grid from row-major cells.
    ///
    /// Callers are expected to supply exactly `rows * columns` cells; the
    /// generator service is the only producer.
    #[must_use]
    pub fn new(rows: usize, columns: usize, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Cell at the given position, `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Total number of motifs.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.rows * self.columns
    }
}
