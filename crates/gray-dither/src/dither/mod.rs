//! Quantization: posterization and error diffusion dithering.
//!
//! Both quantizers map each cell to its nearest palette level. They differ
//! in whether the quantization error is carried to later cells:
//!
//! - **Posterize**: none, every cell is independent
//! - **Floyd-Steinberg**: error is diffused to unprocessed neighbours
//!
//! # Architecture
//!
//! Both implement the [`Quantize`] trait; [`QuantizeMethod`] selects one at
//! runtime for the builder API.
//!
//! # Example
//!
//! ```
//! use gray_dither::{FloydSteinberg, IntensityGrid, Levels, Quantize};
//!
//! let levels = Levels::new(&[0.0, 1.0]).unwrap();
//! let grid = IntensityGrid::new(vec![0.5; 9], 3, 3).unwrap();
//!
//! let result = FloydSteinberg.quantize(&grid, &levels);
//! assert!(result.values().iter().all(|v| *v == 0.0 || *v == 1.0));
//! ```

mod floyd_steinberg;
mod kernel;
mod posterize;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use posterize::Posterize;

use crate::grid::IntensityGrid;
use crate::output::QuantizedGrid;
use crate::palette::Levels;

/// Quantizer selection for the builder API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizeMethod {
    /// Nearest level per cell, no error diffusion.
    Posterize,

    /// Floyd-Steinberg error diffusion (100% propagation, interior cells).
    #[default]
    FloydSteinberg,
}

impl QuantizeMethod {
    /// Pick the method from a plain on/off dithering switch.
    pub fn from_dithering(enabled: bool) -> Self {
        if enabled {
            Self::FloydSteinberg
        } else {
            Self::Posterize
        }
    }

    pub fn quantizer(&self) -> &'static dyn Quantize {
        match self {
            Self::Posterize => &Posterize,
            Self::FloydSteinberg => &FloydSteinberg,
        }
    }
}

/// Trait for palette quantizers.
///
/// Implementors convert a grid of continuous intensities into a grid whose
/// every cell is a member of `levels`.
pub trait Quantize {
    /// Quantize `grid` against `levels`.
    ///
    /// The output has the same shape as `grid`; every value is copied from
    /// `levels`.
    fn quantize(&self, grid: &IntensityGrid, levels: &Levels) -> QuantizedGrid;
}

/// Nearest-level posterization of every cell.
pub fn posterize(grid: &IntensityGrid, levels: &Levels) -> QuantizedGrid {
    Posterize.quantize(grid, levels)
}

/// Floyd-Steinberg dithering in strict row-major order.
pub fn dither(grid: &IntensityGrid, levels: &Levels) -> QuantizedGrid {
    FloydSteinberg.quantize(grid, levels)
}

/// Core error diffusion loop parameterized by kernel.
///
/// Works on a copy of the grid that is updated in place: each cell is read
/// after all earlier cells have added their share of error to it. The scan
/// is top row first, left to right, and cannot be split across rows since
/// row `y + 1` depends on writes made while processing row `y`.
///
/// Cells whose kernel targets would leave the grid neither compute nor
/// diffuse error; they are still snapped to their nearest level.
pub(crate) fn diffuse_with_kernel(
    grid: &IntensityGrid,
    levels: &Levels,
    kernel: &Kernel,
) -> QuantizedGrid {
    let width = grid.width();
    let height = grid.height();
    let mut working = grid.values().to_vec();
    let divisor = kernel.divisor as f64;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let value = working[idx];
            let (_, level) = levels.find_nearest(value);
            working[idx] = level;

            if !kernel.fits(x, y, width, height) {
                continue;
            }

            let error = value - level;
            for &(dx, dy, weight) in kernel.entries {
                let nx = (x as isize + dx as isize) as usize;
                let ny = y + dy as usize;
                working[ny * width + nx] += error * weight as f64 / divisor;
            }
        }
    }

    QuantizedGrid::new(working, width, height)
}
