//! Extract command: dominant colors from a book cover image.

use crate::cli::common::{CliError, CliResult};
use crate::services::extractor;
use clap::Args;
use std::path::PathBuf;

/// Extract dominant colors from an image
#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Path to the image file
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Number of colors to extract
    #[arg(short = 'k', long, default_value_t = extractor::DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        if self.colors == 0 {
            return Err(CliError::validation("Color count must be at least 1"));
        }

        let colors = extractor::extract_from_path(&self.image, self.colors)
            .map_err(|e| CliError::parse(format!("{e:#}")))?;

        if self.json {
            let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
            let payload = serde_json::json!({ "colors": hex });
            println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        } else {
            println!(
                "Extracted {} dominant color(s) from {}:",
                colors.len(),
                self.image.display()
            );
            for (rank, color) in colors.iter().enumerate() {
                println!("  {}. {}", rank + 1, color.to_hex());
            }
            if colors.len() < self.colors {
                println!(
                    "  (requested {}, but the diversity threshold left only {})",
                    self.colors,
                    colors.len()
                );
            }
        }

        Ok(())
    }
}
