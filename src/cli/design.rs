//! Design command: book-inspired end-to-end pattern export.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::models::TropeCatalog;
use crate::parser::stash::parse_stash_csv;
use crate::services::{extractor, generator, matcher};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Build a book-inspired design sheet: extract, match, generate, export
#[derive(Debug, Clone, Args)]
pub struct DesignArgs {
    /// Path to the book cover image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Path to the stash CSV file
    #[arg(short, long, value_name = "FILE")]
    pub stash: PathBuf,

    /// Book trope (names the outer ring color, see `grannygrid tropes`)
    #[arg(short, long, value_name = "NAME")]
    pub trope: String,

    /// Book title for the output filename
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Number of colors to extract from the cover
    #[arg(short = 'k', long, default_value_t = extractor::DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Grid rows
    #[arg(short, long, default_value_t = 8)]
    pub rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 8)]
    pub columns: usize,

    /// RNG seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory the design sheet is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl DesignArgs {
    /// Execute the design command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = TropeCatalog::default();
        let trope = catalog.find(&self.trope).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown trope '{}'. Run `grannygrid tropes` to list them",
                self.trope
            ))
        })?;

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

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = generator::generate_book_grid(
            &matches,
            trope.color,
            self.rows,
            self.columns,
            &mut rng,
        )
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let title = self.title.as_deref().unwrap_or("");
        let path = export::export_design_sheet(
            &grid,
            title,
            &trope.name,
            matches.len(),
            &self.output_dir,
        )
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("\u{2713} Exported design sheet to: {}", path.display());
        Ok(())
    }
}
