//! Design sheet export: pattern PNG with a descriptive filename.

use crate::export::grid_renderer::save_grid_png;
use crate::models::PatternGrid;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Fixed filename used when no book metadata is available.
pub const DEFAULT_PATTERN_FILENAME: &str = "granny-square-pattern.png";

/// Derives the design sheet filename from book metadata.
///
/// `<title>-<trope>-<n>-yarns-pattern.png`, with whitespace runs collapsed
/// to hyphens. A missing title falls back to "book-inspired"; trope and
/// yarn-count segments are skipped when absent.
#[must_use]
pub fn design_sheet_filename(title: &str, trope: &str, yarn_count: usize) -> String {
    let mut name = if title.trim().is_empty() {
        "book-inspired".to_string()
    } else {
        hyphenate(title)
    };

    if !trope.trim().is_empty() {
        name.push('-');
        name.push_str(&hyphenate(trope));
    }

    if yarn_count > 0 {
        name.push_str(&format!("-{yarn_count}-yarns"));
    }

    name.push_str("-pattern.png");
    name
}

fn hyphenate(text: &str) -> String {
    text.trim().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Exports the grid as a PNG using the fixed default filename.
///
/// # Errors
///
/// Returns an error if rendering or writing fails. Failures are scoped to
/// this export; nothing is retried.
pub fn export_pattern(grid: &PatternGrid, directory: &Path) -> Result<PathBuf> {
    let path = directory.join(DEFAULT_PATTERN_FILENAME);
    save_grid_png(grid, &path)?;
    Ok(path)
}

/// Exports a book-inspired design sheet with a derived filename.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn export_design_sheet(
    grid: &PatternGrid,
    title: &str,
    trope: &str,
    yarn_count: usize,
    directory: &Path,
) -> Result<PathBuf> {
    let filename = design_sheet_filename(title, trope, yarn_count);
    let path = directory.join(filename);
    save_grid_png(grid, &path)?;
    log::info!(
        "Exported design sheet with {yarn_count} yarns and trope '{trope}' to {}",
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridCell, RgbColor};

    fn tiny_grid() -> PatternGrid {
        PatternGrid::new(
            1,
            1,
            vec![GridCell::new(vec![RgbColor::new(10, 20, 30)])],
        )
    }

    #[test]
    fn test_filename_full_metadata() {
        assert_eq!(
            design_sheet_filename("The Love Hypothesis", "Fake Dating", 4),
            "The-Love-Hypothesis-Fake-Dating-4-yarns-pattern.png"
        );
    }

    #[test]
    fn test_filename_missing_title() {
        assert_eq!(
            design_sheet_filename("", "Slow Burn", 2),
            "book-inspired-Slow-Burn-2-yarns-pattern.png"
        );
    }

    #[test]
    fn test_filename_no_trope_no_yarns() {
        assert_eq!(
            design_sheet_filename("Emma", "", 0),
            "Emma-pattern.png"
        );
    }

    #[test]
    fn test_export_pattern_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_pattern(&tiny_grid(), dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            DEFAULT_PATTERN_FILENAME
        );
        assert!(path.exists());
    }

    #[test]
    fn test_export_design_sheet_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            export_design_sheet(&tiny_grid(), "My Book", "Royalty", 3, dir.path()).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .contains("My-Book-Royalty-3-yarns"));
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
