//! Usage command: estimate grams of each yarn for a grid.

use crate::cli::common::{CliError, CliResult};
use crate::parser::stash::parse_stash_csv;
use crate::services::usage::estimate_yarn_usage;
use clap::Args;
use std::path::PathBuf;

/// Estimate yarn usage for a grid
#[derive(Debug, Clone, Args)]
pub struct UsageArgs {
    /// Path to the stash CSV file
    #[arg(value_name = "FILE")]
    pub stash: PathBuf,

    /// Grid rows
    #[arg(short, long, default_value_t = 8)]
    pub rows: usize,

    /// Grid columns
    #[arg(short, long, default_value_t = 8)]
    pub columns: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl UsageArgs {
    /// Execute the usage command
    pub fn execute(&self) -> CliResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(CliError::validation(
                "Grid dimensions must be at least 1x1",
            ));
        }

        let records =
            parse_stash_csv(&self.stash).map_err(|e| CliError::parse(format!("{e:#}")))?;

        let estimates: Vec<(String, u32)> = records
            .iter()
            .map(|yarn| {
                (
                    yarn.display_label(),
                    estimate_yarn_usage(yarn, self.rows, self.columns),
                )
            })
            .collect();

        if self.json {
            let payload: Vec<serde_json::Value> = records
                .iter()
                .zip(&estimates)
                .map(|(yarn, (_, grams))| {
                    serde_json::json!({
                        "id": yarn.id,
                        "name": yarn.name,
                        "weight": yarn.weight,
                        "grams": grams,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_default()
            );
            return Ok(());
        }

        println!(
            "Estimated usage for a {}x{} grid ({} squares):",
            self.rows,
            self.columns,
            self.rows * self.columns
        );
        for (label, grams) in &estimates {
            println!("  {label}: {grams}g");
        }

        Ok(())
    }
}
