//! Literary trope catalog with conventional colors.
//!
//! In the book-inspired workflow the selected trope supplies the outermost
//! ring color of every motif. The catalog ships embedded in the binary.

use crate::models::RgbColor;
use serde::Deserialize;

/// A literary trope with its conventional color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trope {
    /// Trope name (e.g., "Enemies to Lovers").
    pub name: String,
    /// Conventional color associated with the trope.
    pub color: RgbColor,
    /// One-line description of the mood the color encodes.
    pub description: String,
}

/// The embedded trope catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct TropeCatalog {
    /// All tropes in catalog order.
    pub tropes: Vec<Trope>,
}

impl TropeCatalog {
    /// Load the trope catalog from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        let json_data = include_str!("../data/tropes.json");
        let catalog: Self = serde_json::from_str(json_data)?;
        Ok(catalog)
    }

    /// Find a trope by exact name (case-insensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Trope> {
        self.tropes
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Tropes whose name or description contains the query,
    /// case-insensitively. An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Trope> {
        if query.is_empty() {
            return self.tropes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.tropes
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of tropes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tropes.len()
    }

    /// Whether the catalog is empty (never true for the embedded data).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tropes.is_empty()
    }
}

impl Default for TropeCatalog {
    fn default() -> Self {
        Self::load().unwrap_or_else(|_| Self { tropes: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let catalog = TropeCatalog::load().expect("Failed to load trope catalog");
        assert_eq!(catalog.len(), 29);
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = TropeCatalog::load().unwrap();
        let trope = catalog.find("enemies to lovers").expect("should exist");
        assert_eq!(trope.name, "Enemies to Lovers");
        assert_eq!(trope.color, RgbColor::new(0xfa, 0x13, 0x38));
    }

    #[test]
    fn test_find_missing() {
        let catalog = TropeCatalog::load().unwrap();
        assert!(catalog.find("Robot Uprising").is_none());
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = TropeCatalog::load().unwrap();
        // "whimsical" only appears in the Fairy Tale Retelling description
        let results = catalog.search("whimsical");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Fairy Tale Retelling");
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let catalog = TropeCatalog::load().unwrap();
        assert_eq!(catalog.search("").len(), catalog.len());
    }
}
