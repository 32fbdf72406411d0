//! Match command: pair extracted colors with stash yarns.

use crate::cli::common::{CliError, CliResult};
use crate::parser::stash::parse_stash_csv;
use crate::services::{extractor, matcher};
use clap::Args;
use std::path::PathBuf;

/// Match colors extracted from an image against a yarn stash
#[derive(Debug, Clone, Args)]
pub struct MatchArgs {
    /// Path to the image file
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Path to the stash CSV file
    #[arg(short, long, value_name = "FILE")]
    pub stash: PathBuf,

    /// Number of colors to extract
    #[arg(short = 'k', long, default_value_t = extractor::DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl MatchArgs {
    /// Execute the match command
    pub fn execute(&self) -> CliResult<()> {
        if self.colors == 0 {
            return Err(CliError::validation("Color count must be at least 1"));
        }

        let stash =
            parse_stash_csv(&self.stash).map_err(|e| CliError::parse(format!("{e:#}")))?;
        if stash.is_empty() {
            return Err(CliError::validation(format!(
                "No yarn records in {}; nothing to match against",
                self.stash.display()
            )));
        }

        let extracted = extractor::extract_from_path(&self.image, self.colors)
            .map_err(|e| CliError::parse(format!("{e:#}")))?;

        let matches = matcher::match_colors_to_yarn(&extracted, &stash);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&matches).unwrap_or_default()
            );
            return Ok(());
        }

        println!("Matches (best first):");
        for m in &matches {
            println!(
                "  {} -> {} {} (distance {:.1})",
                m.source.to_hex(),
                m.yarn.name,
                m.yarn.color.to_hex(),
                m.distance
            );
        }

        Ok(())
    }
}
