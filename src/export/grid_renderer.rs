//! Rasterizes a pattern grid into a PNG image.
//!
//! The output mirrors the on-screen pattern: a black background, a gap
//! between motifs, and each motif drawn as concentric squares with a thin
//! black border around every ring. Everything is rendered at 2x scale for
//! print-friendly resolution.

use crate::models::{PatternGrid, RgbColor};
use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Logical side length of one motif in pixels.
pub const CELL_SIZE: u32 = 50;

/// Output scale factor.
pub const EXPORT_SCALE: u32 = 2;

/// Logical padding around the whole grid.
const GRID_PADDING: u32 = 16;

/// Logical gap between motifs.
const CELL_GAP: u32 = 3;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const RING_BORDER: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Pixel dimensions of the rendered image for a given grid.
#[must_use]
pub fn image_dimensions(grid: &PatternGrid) -> (u32, u32) {
    let columns = grid.columns as u32;
    let rows = grid.rows as u32;
    let width = 2 * GRID_PADDING + columns * CELL_SIZE + columns.saturating_sub(1) * CELL_GAP;
    let height = 2 * GRID_PADDING + rows * CELL_SIZE + rows.saturating_sub(1) * CELL_GAP;
    (width * EXPORT_SCALE, height * EXPORT_SCALE)
}

/// Renders the grid to an RGBA image.
#[must_use]
pub fn render_grid(grid: &PatternGrid) -> RgbaImage {
    let (width, height) = image_dimensions(grid);
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    for row in 0..grid.rows {
        for column in 0..grid.columns {
            let Some(cell) = grid.cell(row, column) else {
                continue;
            };
            let x = (GRID_PADDING + column as u32 * (CELL_SIZE + CELL_GAP)) * EXPORT_SCALE;
            let y = (GRID_PADDING + row as u32 * (CELL_SIZE + CELL_GAP)) * EXPORT_SCALE;
            draw_motif(&mut image, x, y, cell.rings());
        }
    }

    image
}

/// Draws one motif: concentric squares, outermost ring first, each with a
/// border one logical pixel wide.
fn draw_motif(image: &mut RgbaImage, x: u32, y: u32, rings: &[RgbColor]) {
    let ring_count = rings.len() as u32;
    if ring_count == 0 {
        return;
    }

    let cell_px = CELL_SIZE * EXPORT_SCALE;
    let border = EXPORT_SCALE;

    // rings are innermost-first; paint from the outside in so smaller
    // squares land on top
    for (depth, color) in rings.iter().rev().enumerate() {
        let side = cell_px * (ring_count - depth as u32) / ring_count;
        if side == 0 {
            continue;
        }
        let offset = (cell_px - side) / 2;
        let rx = x + offset;
        let ry = y + offset;

        fill_rect(image, rx, ry, side, side, RING_BORDER);
        if side > 2 * border {
            let pixel = Rgba([color.r, color.g, color.b, 255]);
            fill_rect(
                image,
                rx + border,
                ry + border,
                side - 2 * border,
                side - 2 * border,
                pixel,
            );
        }
    }
}

fn fill_rect(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, pixel: Rgba<u8>) {
    for py in y..(y + height).min(image.height()) {
        for px in x..(x + width).min(image.width()) {
            image.put_pixel(px, py, pixel);
        }
    }
}

/// Renders the grid and encodes it as PNG bytes.
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn render_grid_png(grid: &PatternGrid) -> Result<Vec<u8>> {
    let image = DynamicImage::ImageRgba8(render_grid(grid));
    let mut buffer = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buffer);
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .context("Failed to encode pattern PNG")?;
    }
    Ok(buffer)
}

/// Renders the grid and writes a PNG file.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn save_grid_png(grid: &PatternGrid, path: &Path) -> Result<()> {
    let bytes = render_grid_png(grid)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write pattern image: {}", path.display()))
}
