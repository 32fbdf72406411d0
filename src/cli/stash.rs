//! Stash command: inspect a parsed yarn inventory.

use crate::cli::common::{CliError, CliResult};
use crate::parser::stash::parse_stash_csv;
use clap::Args;
use std::path::PathBuf;

/// Parse a yarn stash CSV and show the normalized records
#[derive(Debug, Clone, Args)]
pub struct StashArgs {
    /// Path to the stash CSV file
    #[arg(value_name = "FILE")]
    pub stash: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl StashArgs {
    /// Execute the stash command
    pub fn execute(&self) -> CliResult<()> {
        let records =
            parse_stash_csv(&self.stash).map_err(|e| CliError::parse(format!("{e:#}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&records).unwrap_or_default()
            );
            return Ok(());
        }

        println!(
            "{} yarn(s) in {}:",
            records.len(),
            self.stash.display()
        );
        let mut current_category: Option<&str> = None;
        for record in &records {
            if record.category.as_deref() != current_category {
                current_category = record.category.as_deref();
                if let Some(category) = current_category {
                    println!("{category}:");
                }
            }
            println!(
                "  [{}] {} {} - {} skein(s), {}, size {}",
                record.id,
                record.name,
                record.color.to_hex(),
                record.quantity,
                record.weight,
                record.size
            );
        }

        Ok(())
    }
}
