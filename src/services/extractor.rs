//! Dominant-color extraction from book cover images.
//!
//! Pixels are sampled on a fixed stride, bucketed by exact 24-bit value,
//! ranked by frequency, and filtered so that no two returned colors sit
//! closer than the diversity threshold. The whole pipeline is deterministic
//! for a given image.

use crate::models::RgbColor;
use anyhow::{Context, Result};
use image::DynamicImage;
use std::collections::HashMap;
use std::path::Path;

/// Every Nth pixel is sampled.
pub const SAMPLE_STRIDE: usize = 5;

/// Minimum distance between any two colors accepted into the result.
pub const DIVERSITY_THRESHOLD: f64 = 30.0;

/// Palette size when the caller does not ask for a specific count.
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Extracts up to `count` dominant, mutually diverse colors from an image.
///
/// The result is ordered most-frequent-first and may be shorter than
/// `count` when the diversity threshold prunes the candidate list dry.
/// Frequency ties resolve to the color seen first in scan order, so the
/// output is stable across runs.
#[must_use]
pub fn extract_dominant_colors(image: &DynamicImage, count: usize) -> Vec<RgbColor> {
    if count == 0 {
        return Vec::new();
    }

    let rgba = image.to_rgba8();
    let raw = rgba.as_raw();

    // Bucket sampled pixels by exact value, remembering first-seen order
    // so that frequency ties stay deterministic.
    let mut frequency: HashMap<RgbColor, (u32, usize)> = HashMap::new();
    let mut next_seen = 0usize;

    for chunk in raw.chunks_exact(4).step_by(SAMPLE_STRIDE) {
        let color = RgbColor::new(chunk[0], chunk[1], chunk[2]);
        let entry = frequency.entry(color).or_insert_with(|| {
            let order = next_seen;
            next_seen += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut candidates: Vec<(RgbColor, u32, usize)> = frequency
        .into_iter()
        .map(|(color, (freq, order))| (color, freq, order))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    // Greedy walk: keep a candidate only if it is far enough from
    // everything already kept.
    let mut diverse: Vec<RgbColor> = Vec::with_capacity(count);
    for (color, _, _) in candidates {
        if diverse
            .iter()
            .all(|kept| kept.distance(&color) >= DIVERSITY_THRESHOLD)
        {
            diverse.push(color);
            if diverse.len() >= count {
                break;
            }
        }
    }

    diverse
}

/// Decodes an image from raw bytes and extracts dominant colors.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image. There is no
/// retry; the caller reports the failure and aborts the operation.
pub fn extract_from_bytes(bytes: &[u8], count: usize) -> Result<Vec<RgbColor>> {
    let image = image::load_from_memory(bytes).context("Unable to decode image")?;
    Ok(extract_dominant_colors(&image, count))
}

/// Reads an image file and extracts dominant colors.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn extract_from_path(path: &Path, count: usize) -> Result<Vec<RgbColor>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", path.display()))?;
    extract_from_bytes(&bytes, count)
        .with_context(|| format!("Failed to extract colors from {}", path.display()))
}
