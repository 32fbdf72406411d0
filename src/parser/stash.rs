//! Yarn stash parsing with category carry-over.
//!
//! Stash files are tabular: a row either introduces a category (a name with
//! no color or quantity) or describes one yarn. Categories apply to every
//! data row until the next header. Bad rows are logged and skipped; one
//! broken line never aborts the whole file.

use crate::models::{RgbColor, YarnRecord};
use anyhow::{Context, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// Identifier column.
pub const COLUMN_NO: &str = "No";
/// Yarn (or category) name column.
pub const COLUMN_NAME: &str = "Yarn Colors";
/// Hex color column.
pub const COLUMN_COLOR: &str = "Color (ArtyClick)";
/// Skein count column.
pub const COLUMN_QUANTITY: &str = "Skeins Quantity";
/// Weight-class label column.
pub const COLUMN_WEIGHT: &str = "Skeins Type";
/// Skein size column.
pub const COLUMN_SIZE: &str = "Skeins Size";

/// One stash row as named fields. Empty cells are `None`.
///
/// The row model is independent of the file format; the CSV front-end below
/// is just one producer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StashRow {
    /// Value of the `No` column.
    pub no: Option<String>,
    /// Value of the `Yarn Colors` column.
    pub name: Option<String>,
    /// Value of the `Color (ArtyClick)` column.
    pub color: Option<String>,
    /// Value of the `Skeins Quantity` column.
    pub quantity: Option<String>,
    /// Value of the `Skeins Type` column.
    pub weight: Option<String>,
    /// Value of the `Skeins Size` column.
    pub size: Option<String>,
}

impl StashRow {
    /// A category header carries a name but neither color nor quantity.
    #[must_use]
    pub fn is_category_header(&self) -> bool {
        self.name.is_some() && self.color.is_none() && self.quantity.is_none()
    }
}

/// Converts rows into yarn records, carrying the running category forward.
///
/// Defaults per field: id falls back to `yarn_<row-index>`, the color to the
/// placeholder gray, quantity to 1 on absent or non-numeric values, weight
/// and size to "Unknown". Rows that fail outright (a present but
/// unparseable color value) are logged and skipped.
#[must_use]
pub fn parse_stash_rows(rows: &[StashRow]) -> Vec<YarnRecord> {
    let mut records = Vec::new();
    let mut current_category = String::new();

    for (index, row) in rows.iter().enumerate() {
        if row.is_category_header() {
            if let Some(name) = &row.name {
                current_category.clone_from(name);
            }
            continue;
        }

        match row_to_record(index, row, &current_category) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Skipping stash row {index}: {e}"),
        }
    }

    records
}

/// Builds one record from a data row.
fn row_to_record(index: usize, row: &StashRow, category: &str) -> Result<YarnRecord> {
    let id = row
        .no
        .clone()
        .unwrap_or_else(|| format!("yarn_{index}"));
    let name = row
        .name
        .clone()
        .unwrap_or_else(|| "Unnamed Yarn".to_string());

    // Absent color gets the placeholder; a present but malformed value is a
    // row error so a junk string never reaches distance ranking.
    let color = match &row.color {
        None => RgbColor::default(),
        Some(value) => RgbColor::from_hex(value)
            .ok_or_else(|| anyhow::anyhow!("invalid color value '{value}'"))?,
    };

    let quantity = row
        .quantity
        .as_deref()
        .and_then(|q| q.parse::<u32>().ok())
        .unwrap_or(1);

    let weight = row
        .weight
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let size = row.size.clone().unwrap_or_else(|| "Unknown".to_string());

    Ok(YarnRecord {
        id,
        name,
        color,
        quantity,
        weight,
        size,
        category: if category.is_empty() {
            None
        } else {
            Some(category.to_string())
        },
    })
}

/// Column positions resolved from the CSV header line.
struct ColumnIndexes {
    no: Option<usize>,
    name: Option<usize>,
    color: Option<usize>,
    quantity: Option<usize>,
    weight: Option<usize>,
    size: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(headers: &StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            no: position(COLUMN_NO),
            name: position(COLUMN_NAME),
            color: position(COLUMN_COLOR),
            quantity: position(COLUMN_QUANTITY),
            weight: position(COLUMN_WEIGHT),
            size: position(COLUMN_SIZE),
        }
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> Option<String> {
    let value = record.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses a stash CSV from any reader.
///
/// # Errors
///
/// Fails only when the header line is unreadable; individual broken rows
/// are logged and skipped.
pub fn parse_stash_reader<R: Read>(reader: R) -> Result<Vec<YarnRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("Failed to read stash header row")?
        .clone();
    let columns = ColumnIndexes::resolve(&headers);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        match result {
            Ok(record) => rows.push(StashRow {
                no: field(&record, columns.no),
                name: field(&record, columns.name),
                color: field(&record, columns.color),
                quantity: field(&record, columns.quantity),
                weight: field(&record, columns.weight),
                size: field(&record, columns.size),
            }),
            Err(e) => log::warn!("Skipping unreadable stash line: {e}"),
        }
    }

    Ok(parse_stash_rows(&rows))
}

/// Reads and parses a stash CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its header is
/// unreadable.
pub fn parse_stash_csv(path: &Path) -> Result<Vec<YarnRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open stash file: {}", path.display()))?;
    parse_stash_reader(file)
        .with_context(|| format!("Failed to parse stash file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_row(name: &str) -> StashRow {
        StashRow {
            name: Some(name.to_string()),
            ..StashRow::default()
        }
    }

    #[test]
    fn test_category_carries_to_data_rows() {
        let rows = vec![
            header_row("Reds"),
            StashRow {
                no: Some("1".into()),
                name: Some("Cherry".into()),
                color: Some("#ff0000".into()),
                quantity: Some("2".into()),
                weight: Some("worsted".into()),
                size: Some("4".into()),
            },
        ];

        let records = parse_stash_rows(&rows);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.category.as_deref(), Some("Reds"));
        assert_eq!(record.color, RgbColor::new(255, 0, 0));
        assert_eq!(record.quantity, 2);
        assert_eq!(record.weight, "worsted");
    }

    #[test]
    fn test_category_updates_on_later_header() {
        let rows = vec![
            header_row("Reds"),
            StashRow {
                name: Some("Cherry".into()),
                color: Some("#ff0000".into()),
                ..StashRow::default()
            },
            header_row("Blues"),
            StashRow {
                name: Some("Sky".into()),
                color: Some("#00ccff".into()),
                ..StashRow::default()
            },
        ];

        let records = parse_stash_rows(&rows);
        assert_eq!(records[0].category.as_deref(), Some("Reds"));
        assert_eq!(records[1].category.as_deref(), Some("Blues"));
    }

    #[test]
    fn test_missing_color_gets_placeholder() {
        let rows = vec![StashRow {
            name: Some("Mystery".into()),
            quantity: Some("1".into()),
            ..StashRow::default()
        }];

        let records = parse_stash_rows(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].color.to_hex(), "#cccccc");
    }

    #[test]
    fn test_color_without_hash_prefix() {
        let rows = vec![StashRow {
            name: Some("Moss".into()),
            color: Some("00a550".into()),
            quantity: Some("1".into()),
            ..StashRow::default()
        }];

        let records = parse_stash_rows(&rows);
        assert_eq!(records[0].color.to_hex(), "#00a550");
    }

    #[test]
    fn test_invalid_color_row_is_skipped() {
        let rows = vec![
            StashRow {
                name: Some("Broken".into()),
                color: Some("not-a-color".into()),
                quantity: Some("1".into()),
                ..StashRow::default()
            },
            StashRow {
                name: Some("Fine".into()),
                color: Some("#112233".into()),
                quantity: Some("1".into()),
                ..StashRow::default()
            },
        ];

        let records = parse_stash_rows(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Fine");
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let rows = vec![StashRow {
            name: Some("Bare".into()),
            color: Some("#123456".into()),
            ..StashRow::default()
        }];

        let record = &parse_stash_rows(&rows)[0];
        assert_eq!(record.id, "yarn_0");
        assert_eq!(record.quantity, 1);
        assert_eq!(record.weight, "Unknown");
        assert_eq!(record.size, "Unknown");
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_non_numeric_quantity_defaults_to_one() {
        let rows = vec![StashRow {
            name: Some("Odd".into()),
            color: Some("#123456".into()),
            quantity: Some("a few".into()),
            ..StashRow::default()
        }];

        assert_eq!(parse_stash_rows(&rows)[0].quantity, 1);
    }

    #[test]
    fn test_csv_end_to_end() {
        let csv_data = "\
No,Yarn Colors,Color (ArtyClick),Skeins Quantity,Skeins Type,Skeins Size
1,Blue Shades,,,,
1.1,Water,#b0e0e6,2,light DK,1
1.2,Periwinkle,#ccccff,1,Medium worsted,4
";
        let records = parse_stash_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, "1.1");
        assert_eq!(records[0].name, "Water");
        assert_eq!(records[0].category.as_deref(), Some("Blue Shades"));
        assert_eq!(records[0].quantity, 2);

        assert_eq!(records[1].name, "Periwinkle");
        assert_eq!(records[1].weight, "Medium worsted");
    }

    #[test]
    fn test_csv_missing_column_still_parses() {
        // No quantity column at all: every name-only line is a header, so
        // rows need a color to count as data
        let csv_data = "\
Yarn Colors,Color (ArtyClick)
Reds,
Cherry,#ff0000
";
        let records = parse_stash_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Cherry");
        assert_eq!(records[0].category.as_deref(), Some("Reds"));
    }
}
