//! Tropes command: list or search the trope catalog.

use crate::cli::common::CliResult;
use crate::models::TropeCatalog;
use clap::Args;

/// List the literary tropes and their colors
#[derive(Debug, Clone, Args)]
pub struct TropesArgs {
    /// Filter tropes by name or description
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl TropesArgs {
    /// Execute the tropes command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = TropeCatalog::default();
        let query = self.query.as_deref().unwrap_or("");
        let tropes = catalog.search(query);

        if self.json {
            let payload: Vec<serde_json::Value> = tropes
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name,
                        "color": t.color.to_hex(),
                        "description": t.description,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_default()
            );
            return Ok(());
        }

        if tropes.is_empty() {
            println!("No tropes match '{query}'");
            return Ok(());
        }

        for trope in tropes {
            println!(
                "  {} {} - {}",
                trope.color.to_hex(),
                trope.name,
                trope.description
            );
        }

        Ok(())
    }
}
