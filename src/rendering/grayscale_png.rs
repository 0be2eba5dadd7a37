//! Source image loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gray_dither::IntensityGrid;

use crate::error::LoadError;

/// Load a PNG as an intensity grid.
///
/// Palette and low-bit-depth images are expanded, 16-bit samples are
/// truncated to 8 bits. Color is reduced to luma with the ITU-R 601-2
/// weights `L = R*299/1000 + G*587/1000 + B*114/1000`; alpha is ignored.
pub fn load_grayscale_png(path: &Path) -> Result<IntensityGrid, LoadError> {
    let file = File::open(path)?;
    let grid = decode_grayscale_png(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Loaded source image"
    );
    Ok(grid)
}

/// Decode PNG bytes from any reader. See [`load_grayscale_png`].
pub fn decode_grayscale_png<R: Read>(reader: R) -> Result<IntensityGrid, LoadError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let width = frame.width as usize;
    let height = frame.height as usize;
    let samples = &buf[..frame.buffer_size()];

    let channels = match frame.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(LoadError::UnsupportedColor(other)),
    };

    let luma: Vec<u8> = samples
        .chunks_exact(frame.line_size)
        .flat_map(|line| line[..width * channels].chunks_exact(channels))
        .map(|pixel| match channels {
            1 | 2 => pixel[0],
            _ => luma_601(pixel[0], pixel[1], pixel[2]),
        })
        .collect();

    Ok(IntensityGrid::from_luma8(&luma, width, height)?)
}

/// ITU-R 601-2 luma, truncated like an 8-bit `L` conversion.
fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let l = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
    l.min(255) as u8
}
