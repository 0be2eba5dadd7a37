//! Preview rendering of the quantized thumbnail.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gray_dither::QuantizedGrid;

use crate::error::PreviewError;

/// Write `grid` as an 8-bit grayscale PNG, one pixel per cell.
pub fn write_preview_png(path: &Path, grid: &QuantizedGrid) -> Result<(), PreviewError> {
    let file = File::create(path)?;
    encode_preview_png(BufWriter::new(file), grid)?;
    tracing::debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "Wrote preview"
    );
    Ok(())
}

/// Encode `grid` as an 8-bit grayscale PNG into `writer`.
pub fn encode_preview_png<W: Write>(writer: W, grid: &QuantizedGrid) -> Result<(), PreviewError> {
    let mut encoder = png::Encoder::new(writer, grid.width() as u32, grid.height() as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&grid.to_luma8())?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::decode_grayscale_png;
    use std::io::Cursor;

    #[test]
    fn test_preview_decodes_back_to_levels() {
        let grid = QuantizedGrid::new(vec![0.0, 1.0, 128.0 / 255.0, 0.0], 2, 2);
        let mut buf = Vec::new();
        encode_preview_png(&mut buf, &grid).unwrap();

        let decoded = decode_grayscale_png(Cursor::new(buf)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
        assert_eq!(decoded.values(), grid.values());
    }
}
