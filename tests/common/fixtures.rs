//! Test fixtures and constants.

use std::io::Cursor;
use std::path::Path;

use gray_dither::IntensityGrid;
use shapez_pixelart::blueprint::{encode_document, BlueprintDocument, Entry};
use shapez_pixelart::palette::{CellTemplate, Palette};

/// Facts about the built-in reference blueprint
pub mod reference {
    /// Inner slot (level index) with no buildings
    pub const EMPTY_LEVEL: usize = 12;

    /// Level index whose single building has no `X` field
    pub const IMPLICIT_X_LEVEL: usize = 7;

    /// Outermost X offsets of the reference row
    pub const BOOKENDS: (i64, i64) = (-8, 9);
}

/// Parse one entry from JSON
pub fn entry(json: &str) -> Entry {
    serde_json::from_str(json).unwrap()
}

/// Reference blueprint with one `{"X": offset, "T": name}` entry per item
pub fn reference_blueprint(offsets: &[(i64, &str)]) -> String {
    let entries = offsets
        .iter()
        .map(|(x, t)| entry(&format!(r#"{{"X":{x},"T":"{t}"}}"#)))
        .collect();
    encode_document(&BlueprintDocument::with_entries(entries))
        .unwrap()
        .into_string()
}

/// Black / white palette where white places nothing
pub fn black_white_palette() -> Palette {
    Palette::new(vec![
        (
            0.0,
            CellTemplate::from_entries(vec![entry(r#"{"T":"TrashDefaultInternalVariant"}"#)]),
        ),
        (1.0, CellTemplate::Empty),
    ])
    .unwrap()
}

/// Horizontal ramp from 0.0 on the left to 1.0 on the right
pub fn horizontal_ramp(width: usize, height: usize) -> IntensityGrid {
    let values = (0..width * height)
        .map(|i| (i % width) as f64 / (width - 1) as f64)
        .collect();
    IntensityGrid::new(values, width, height).unwrap()
}

/// Deterministic pseudo-random grid
pub fn noise(width: usize, height: usize, seed: u64) -> IntensityGrid {
    let mut state = seed;
    let values = (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect();
    IntensityGrid::new(values, width, height).unwrap()
}

/// Encode 8-bit samples as a PNG
pub fn png_bytes(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    buf.into_inner()
}

/// Write an 8-bit grayscale PNG to `path`
pub fn write_gray_png(path: &Path, width: u32, height: u32, data: &[u8]) {
    std::fs::write(path, png_bytes(width, height, png::ColorType::Grayscale, data)).unwrap();
}
