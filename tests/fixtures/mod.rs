//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Path to the grannygrid binary under test.
pub fn grannygrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_grannygrid")
}

/// A stash CSV with two categories and three yarns.
pub const SAMPLE_STASH_CSV: &str = "\
No,Yarn Colors,Color (ArtyClick),Skeins Quantity,Skeins Type,Skeins Size
1,Reds,,,,
1.1,Cherry,#ff0000,2,Worsted Weight,4
1.2,Rose,#ff9999,1,light DK,2
2,Greens,,,,
2.1,Fern,#00ff00,3,Medium worsted,4
";

/// Writes the sample stash CSV into `dir` and returns its path.
pub fn write_sample_stash(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("stash.csv");
    fs::write(&path, SAMPLE_STASH_CSV).expect("Failed to write sample stash");
    path
}

/// Writes a stash CSV with a header line but no records.
pub fn write_empty_stash(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("empty.csv");
    fs::write(
        &path,
        "No,Yarn Colors,Color (ArtyClick),Skeins Quantity,Skeins Type,Skeins Size\n",
    )
    .expect("Failed to write empty stash");
    path
}

/// Writes a solid-color PNG and returns its path.
pub fn write_solid_png(dir: &TempDir, name: &str, r: u8, g: u8, b: u8) -> PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(16, 16, Rgba([r, g, b, 255]))
        .save(&path)
        .expect("Failed to write test image");
    path
}

/// Writes a PNG split into two vertical color bands and returns its path.
pub fn write_two_tone_png(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut img = RgbaImage::new(16, 16);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        *pixel = if x < 8 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 255])
        };
    }
    img.save(&path).expect("Failed to write test image");
    path
}
