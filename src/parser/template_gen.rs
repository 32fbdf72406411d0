//! Stash template generation (serialization).
//!
//! Produces the starter CSV users fill in with their own yarn inventory,
//! with atomic file writes for safety.

use crate::parser::stash::{
    COLUMN_COLOR, COLUMN_NAME, COLUMN_NO, COLUMN_QUANTITY, COLUMN_SIZE, COLUMN_WEIGHT,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Default filename for the downloadable template.
pub const TEMPLATE_FILENAME: &str = "yarn-stash-template.csv";

/// Sample rows: two category groups with example yarns, matching the column
/// schema the parser expects.
const SAMPLE_ROWS: [[&str; 6]; 5] = [
    ["1", "Blue Shades", "", "", "", ""],
    ["1.1", "Water", "#b0e0e6", "2", "light DK", "1"],
    ["1.2", "Periwinkle", "#ccccff", "1", "Medium worsted", "4"],
    ["2", "Green Shades", "", "", "", ""],
    ["2.1", "Persian", "#00a550", "1", "light DK", "1"],
];

/// Generates the template CSV content.
///
/// # Errors
///
/// Returns an error only if CSV serialization fails, which would indicate a
/// bug in the sample data.
pub fn generate_template_csv() -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            COLUMN_NO,
            COLUMN_NAME,
            COLUMN_COLOR,
            COLUMN_QUANTITY,
            COLUMN_WEIGHT,
            COLUMN_SIZE,
        ])
        .context("Failed to write template header")?;

    for row in SAMPLE_ROWS {
        writer
            .write_record(row)
            .context("Failed to write template row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush template CSV: {e}"))?;
    String::from_utf8(bytes).context("Template CSV was not valid UTF-8")
}

/// Writes the template CSV to the given path.
///
/// This performs an atomic write using a temp file + rename pattern to
/// ensure the file is never left in a corrupted state.
///
/// # Errors
///
/// Returns errors for file I/O failures, permission issues, or atomic
/// rename failures.
pub fn save_template(path: &Path) -> Result<()> {
    let content = generate_template_csv()?;
    atomic_write(path, &content)
}

/// Performs an atomic file write using temp file + rename pattern.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::stash::parse_stash_reader;

    #[test]
    fn test_template_has_header_and_samples() {
        let csv = generate_template_csv().unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "No,Yarn Colors,Color (ArtyClick),Skeins Quantity,Skeins Type,Skeins Size"
        );
        assert_eq!(csv.lines().count(), 1 + SAMPLE_ROWS.len());
        assert!(csv.contains("Periwinkle"));
        assert!(csv.contains("Green Shades"));
    }

    #[test]
    fn test_template_round_trips_through_parser() {
        let csv = generate_template_csv().unwrap();
        let records = parse_stash_reader(csv.as_bytes()).unwrap();

        // Three data rows; the two category lines become categories
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Water");
        assert_eq!(records[0].category.as_deref(), Some("Blue Shades"));
        assert_eq!(records[2].name, "Persian");
        assert_eq!(records[2].category.as_deref(), Some("Green Shades"));
    }

    #[test]
    fn test_save_template_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.csv");

        save_template(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("No,Yarn Colors"));
        // No temp file left behind
        assert!(!dir.path().join("template.csv.tmp").exists());
    }
}
