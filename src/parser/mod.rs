//! Parsing and generation for the yarn inventory file format.
//!
//! This module handles reading yarn stash CSV files into normalized records
//! and generating the downloadable stash template.

pub mod stash;
pub mod template_gen;

// Re-export commonly used functions
pub use stash::{parse_stash_csv, parse_stash_rows, StashRow};
pub use template_gen::{generate_template_csv, save_template};
