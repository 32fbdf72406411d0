//! Randomized grid generation.
//!
//! Every cell independently draws a shuffled subset of the working palette,
//! so neighboring squares are uncorrelated and repeats across cells happen
//! by chance. The RNG is injected: interactive callers pass `rand::rng()`,
//! tests and the CLI `--seed` flag use a seeded generator for reproducible
//! output.

use crate::models::{ColorMatch, GridCell, Palette, PatternGrid, RgbColor, MAX_RINGS};
use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Inner ring count for book-inspired squares; the trope color is appended
/// as the outermost ring on top of these.
pub const BOOK_INNER_COLORS: usize = 3;

/// Generates a rows x columns grid from the working palette.
///
/// Each cell gets `colors_per_square` colors via shuffle-and-slice. All
/// validation happens before any cell is built, so a rejected call leaves
/// no partial result.
///
/// # Errors
///
/// Rejects an empty palette, zero dimensions, and a colors-per-square
/// outside `1..=min(MAX_RINGS, palette size)`.
pub fn generate_grid<R: Rng>(
    palette: &Palette,
    rows: usize,
    columns: usize,
    colors_per_square: usize,
    rng: &mut R,
) -> Result<PatternGrid> {
    if palette.is_empty() {
        bail!("Add at least one color to the palette before generating");
    }
    if rows == 0 || columns == 0 {
        bail!("Grid dimensions must be at least 1x1 (got {rows}x{columns})");
    }
    if colors_per_square == 0 {
        bail!("Each square needs at least one color");
    }
    if colors_per_square > palette.len() {
        bail!(
            "Can't use more colors per square than the palette holds: \
             palette has {} colors, requested {} per square",
            palette.len(),
            colors_per_square
        );
    }
    if colors_per_square > MAX_RINGS {
        bail!("At most {MAX_RINGS} colors per square are rendered");
    }

    let mut cells = Vec::with_capacity(rows * columns);
    for _ in 0..rows * columns {
        let mut colors = palette.colors().to_vec();
        colors.shuffle(rng);
        colors.truncate(colors_per_square);
        cells.push(GridCell::new(colors));
    }

    Ok(PatternGrid::new(rows, columns, cells))
}

/// Generates a book-inspired grid from matched yarn colors.
///
/// Each cell takes up to [`BOOK_INNER_COLORS`] shuffled matched-yarn colors
/// and the trope color as the outermost ring.
///
/// # Errors
///
/// Rejects an empty match list and zero dimensions.
pub fn generate_book_grid<R: Rng>(
    matches: &[ColorMatch],
    trope_color: RgbColor,
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<PatternGrid> {
    if matches.is_empty() {
        bail!("Extract colors and match yarns before generating");
    }
    if rows == 0 || columns == 0 {
        bail!("Grid dimensions must be at least 1x1 (got {rows}x{columns})");
    }

    let yarn_colors: Vec<RgbColor> = matches.iter().map(|m| m.yarn.color).collect();

    let mut cells = Vec::with_capacity(rows * columns);
    for _ in 0..rows * columns {
        let mut colors = yarn_colors.clone();
        colors.shuffle(rng);
        colors.truncate(BOOK_INNER_COLORS);
        colors.push(trope_color);
        cells.push(GridCell::new(colors));
    }

    Ok(PatternGrid::new(rows, columns, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YarnRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_palette(n: u8) -> Palette {
        Palette::from_colors((0..n).map(|i| RgbColor::new(i * 20, i, 0)))
    }

    #[test]
    fn test_generates_expected_shape() {
        let palette = test_palette(5);
        let mut rng = StdRng::seed_from_u64(7);

        let grid = generate_grid(&palette, 3, 4, 2, &mut rng).unwrap();
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.cells().len(), 12);

        for cell in grid.cells() {
            assert_eq!(cell.colors.len(), 2);
            for color in &cell.colors {
                assert!(palette.contains(color));
            }
        }
    }

    #[test]
    fn test_cell_colors_are_distinct() {
        // Shuffle-and-slice never repeats a palette entry within one cell
        let palette = test_palette(6);
        let mut rng = StdRng::seed_from_u64(3);

        let grid = generate_grid(&palette, 5, 5, 4, &mut rng).unwrap();
        for cell in grid.cells() {
            let mut seen = cell.colors.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), cell.colors.len());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let palette = test_palette(6);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = generate_grid(&palette, 4, 4, 3, &mut rng_a).unwrap();
        let b = generate_grid(&palette, 4, 4, 3, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_grid(&Palette::new(), 2, 2, 1, &mut rng).is_err());
    }

    #[test]
    fn test_too_many_colors_per_square_rejected() {
        let palette = test_palette(2);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_grid(&palette, 2, 2, 3, &mut rng).unwrap_err();
        assert!(err.to_string().contains("palette has 2 colors"));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let palette = test_palette(3);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_grid(&palette, 0, 2, 1, &mut rng).is_err());
        assert!(generate_grid(&palette, 2, 0, 1, &mut rng).is_err());
    }

    #[test]
    fn test_book_grid_has_trope_outer_ring() {
        let mut yarn = YarnRecord::new("1", "Sky");
        yarn.color = RgbColor::new(0, 0, 255);
        let matches = vec![ColorMatch::new(RgbColor::new(0, 0, 250), yarn)];
        let trope = RgbColor::new(0x66, 0x33, 0x99);

        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate_book_grid(&matches, trope, 2, 2, &mut rng).unwrap();

        for cell in grid.cells() {
            assert_eq!(cell.outer_color(), Some(&trope));
            // One matched yarn plus the trope ring
            assert_eq!(cell.colors.len(), 2);
        }
    }

    #[test]
    fn test_book_grid_caps_inner_colors() {
        let matches: Vec<ColorMatch> = (0..6)
            .map(|i| {
                let mut yarn = YarnRecord::new(format!("{i}"), format!("Yarn {i}"));
                yarn.color = RgbColor::new(i * 40, 0, 0);
                ColorMatch::new(yarn.color, yarn)
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(9);
        let grid =
            generate_book_grid(&matches, RgbColor::new(1, 2, 3), 3, 3, &mut rng).unwrap();

        for cell in grid.cells() {
            assert_eq!(cell.colors.len(), BOOK_INNER_COLORS + 1);
        }
    }

    #[test]
    fn test_book_grid_requires_matches() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_book_grid(&[], RgbColor::new(0, 0, 0), 2, 2, &mut rng).is_err());
    }
}
