//! Granny Square Studio library.
//!
//! This library provides the core functionality for the pattern designer:
//! color extraction from cover images, yarn stash parsing and matching,
//! grid generation, and PNG export.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
#[cfg(feature = "ratatui")]
pub mod tui;
