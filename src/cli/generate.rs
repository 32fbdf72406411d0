//! Generate command: build a randomized pattern grid.

use crate::cli::common::{CliError, CliResult};
use crate::export;
use crate::models::{Palette, RgbColor};
use crate::services::{extractor, generator};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Generate a granny square grid from palette colors or an image
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Palette color as hex (repeatable, e.g. --color "#4a701f")
    #[arg(short = 'c', long = "color", value_name = "HEX")]
    pub palette_colors: Vec<String>,

    /// Extract the palette from this image instead of --color values
    #[arg(short, long, value_name = "IMAGE", conflicts_with = "palette_colors")]
    pub image: Option<PathBuf>,

    /// Number of colors to extract when --image is used
    #[arg(short = 'k', long, default_value_t = extractor::DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Grid rows
    #[arg(short, long, default_value_t = 8)]
    pub rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 8)]
    pub columns: usize,

    /// Colors per square
    #[arg(short = 'n', long, default_value_t = 4)]
    pub colors_per_square: usize,

    /// RNG seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the rendered pattern PNG here
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output the grid as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let palette = self.build_palette()?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let grid = generator::generate_grid(
            &palette,
            self.rows,
            self.columns,
            self.colors_per_square,
            &mut rng,
        )
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if let Some(output) = &self.output {
            export::save_grid_png(&grid, output)
                .map_err(|e| CliError::io(format!("{e:#}")))?;
            println!("\u{2713} Wrote pattern image to: {}", output.display());
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&grid).unwrap_or_default()
            );
        } else {
            println!(
                "Generated a {}x{} grid ({} squares, {} colors per square) from {} palette color(s)",
                grid.rows,
                grid.columns,
                grid.square_count(),
                self.colors_per_square,
                palette.len()
            );
        }

        Ok(())
    }

    /// Resolves the working palette from --color values or --image.
    fn build_palette(&self) -> CliResult<Palette> {
        if let Some(image) = &self.image {
            let colors = extractor::extract_from_path(image, self.colors)
                .map_err(|e| CliError::parse(format!("{e:#}")))?;
            return Ok(Palette::from_colors(colors));
        }

        if self.palette_colors.is_empty() {
            return Err(CliError::validation(
                "Provide at least one --color or an --image to extract from",
            ));
        }

        let mut palette = Palette::new();
        for value in &self.palette_colors {
            let color = RgbColor::from_hex(value).ok_or_else(|| {
                CliError::validation(format!("'{value}' is not a valid #rrggbb color"))
            })?;
            palette.add(color);
        }
        Ok(palette)
    }
}
