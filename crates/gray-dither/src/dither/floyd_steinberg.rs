//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Distributes 100% of the quantization error to 4 neighbours. Only cells
//! with all four neighbours inside the grid diffuse; the last row and the
//! first and last columns are snapped without passing error on.

use crate::grid::IntensityGrid;
use crate::output::QuantizedGrid;
use crate::palette::Levels;

use super::{diffuse_with_kernel, Quantize, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// The error is the cell's value after earlier diffusion minus its chosen
/// level.
pub struct FloydSteinberg;

impl Quantize for FloydSteinberg {
    fn quantize(&self, grid: &IntensityGrid, levels: &Levels) -> QuantizedGrid {
        diffuse_with_kernel(grid, levels, &FLOYD_STEINBERG)
    }
}
