//! Block-mean downsampling.

use super::error::DownsampleError;
use crate::grid::IntensityGrid;

/// Reduce `grid` to `target_width` x `target_height` by block averaging.
///
/// Block sizes are real-valued: `source / target` per axis. Output cell
/// `(bx, by)` is the mean of the source rectangle
/// `[floor(bx*bw), floor((bx+1)*bw)) x [floor(by*bh), floor((by+1)*bh))`.
/// Since both block sizes are at least one, every block covers at least
/// one source pixel and every source pixel lands in exactly one block.
///
/// # Errors
///
/// [`DownsampleError::InvalidDimensions`] when a target dimension is zero
/// or exceeds the source dimension.
pub fn downsample(
    grid: &IntensityGrid,
    target_width: usize,
    target_height: usize,
) -> Result<IntensityGrid, DownsampleError> {
    let (width, height) = (grid.width(), grid.height());
    let invalid = || DownsampleError::InvalidDimensions {
        source_width: width,
        source_height: height,
        target_width,
        target_height,
    };
    if target_width == 0 || target_height == 0 {
        return Err(invalid());
    }

    let block_width = width as f64 / target_width as f64;
    let block_height = height as f64 / target_height as f64;
    if block_width < 1.0 || block_height < 1.0 {
        return Err(invalid());
    }

    let values = grid.values();
    let mut output = Vec::with_capacity(target_width * target_height);

    for by in 0..target_height {
        let y0 = (by as f64 * block_height) as usize;
        let y1 = (((by + 1) as f64 * block_height) as usize).min(height);
        for bx in 0..target_width {
            let x0 = (bx as f64 * block_width) as usize;
            let x1 = (((bx + 1) as f64 * block_width) as usize).min(width);

            let mut sum = 0.0;
            for y in y0..y1 {
                let row = &values[y * width..(y + 1) * width];
                sum += row[x0..x1].iter().sum::<f64>();
            }
            let count = (x1 - x0) * (y1 - y0);
            output.push(sum / count as f64);
        }
    }

    Ok(IntensityGrid::from_parts(output, target_width, target_height))
}
