//! Data models for palettes, yarn records, grids, and session state.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod color_match;
pub mod grid;
pub mod palette;
pub mod picker_palette;
pub mod rgb;
pub mod session;
pub mod trope;
pub mod yarn;

// Re-export all model types
pub use color_match::ColorMatch;
pub use grid::{GridCell, PatternGrid, MAX_RINGS};
pub use palette::Palette;
pub use picker_palette::{PickerColor, PickerPalette, Shade};
pub use rgb::RgbColor;
pub use session::{BookInfo, ExtractionToken, GridSettings, SessionState};
pub use trope::{Trope, TropeCatalog};
pub use yarn::YarnRecord;
