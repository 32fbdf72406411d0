//! Template command: write the starter stash CSV.

use crate::cli::common::{CliError, CliResult};
use crate::parser::template_gen::{save_template, TEMPLATE_FILENAME};
use clap::Args;
use std::path::PathBuf;

/// Write a yarn stash template CSV to fill in
#[derive(Debug, Clone, Args)]
pub struct TemplateArgs {
    /// Output path (defaults to yarn-stash-template.csv)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TemplateArgs {
    /// Execute the template command
    pub fn execute(&self) -> CliResult<()> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(TEMPLATE_FILENAME));

        save_template(&path).map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("\u{2713} Wrote stash template to: {}", path.display());
        Ok(())
    }
}
