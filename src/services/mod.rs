//! Service layer for the pattern-design pipeline.
//!
//! Services are pure, stateless functions over the model types: color
//! extraction, yarn matching, usage estimation, and grid generation.
//! They never touch session state directly.

pub mod extractor;
pub mod generator;
pub mod matcher;
pub mod usage;

// Re-export commonly used functions
pub use extractor::{extract_dominant_colors, extract_from_bytes, extract_from_path};
pub use generator::{generate_book_grid, generate_grid};
pub use matcher::match_colors_to_yarn;
pub use usage::estimate_yarn_usage;
