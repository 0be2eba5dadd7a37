#![allow(clippy::needless_range_loop)]

//! gray-dither: grayscale grid reduction and palette quantization
//!
//! This library turns an arbitrary-resolution grid of intensities into a
//! small grid whose every cell is one of a fixed, limited set of brightness
//! levels. It is the numeric half of the blueprint generator: the other half
//! (templates, serialization) lives in the application crate.
//!
//! # Quick Start
//!
//! The [`GrayDitherer`] builder is the primary entry point:
//!
//! ```
//! use gray_dither::{GrayDitherer, IntensityGrid, Levels};
//!
//! let levels = Levels::new(&[0.0, 0.5, 1.0]).unwrap();
//! let grid = IntensityGrid::new(vec![0.1, 0.4, 0.6, 0.9], 2, 2).unwrap();
//!
//! let result = GrayDitherer::new(levels).quantize(&grid).unwrap();
//!
//! assert_eq!(result.width(), 2);
//! assert_eq!(result.height(), 2);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! IntensityGrid           (values in [0, 1], any resolution)
//!     |
//!     v
//! [Downsample]            (block mean, target <= source on both axes)
//!     |
//!     v
//! [Remap]                 (affine: grid min/max -> palette min/max)
//!     |
//!     v
//! ╔═══════════════════════════════════════════╗
//! ║  Quantize                                 ║
//! ║                                           ║
//! ║  Posterize: nearest level, per cell       ║
//! ║                                           ║
//! ║  FloydSteinberg: nearest level, then      ║
//! ║    error = value - level diffused to      ║
//! ║    unprocessed neighbours (7, 3, 5, 1)/16 ║
//! ║    interior cells only                    ║
//! ╚═══════════════════════════════════════════╝
//!     |
//!     v
//! QuantizedGrid           (every cell is a member of Levels)
//! ```
//!
//! # Nearest Level
//!
//! Matching is a plain absolute difference on the scalar intensity. Levels
//! are scanned in ascending order and the first minimum wins, so a value
//! exactly halfway between two levels resolves to the darker one.
//!
//! # Boundary Cells
//!
//! The Floyd-Steinberg pass used here never diffuses from the last row or
//! from the first and last columns. Those cells still receive error from
//! interior neighbours and are still quantized, so the output stays
//! palette-exact everywhere.

pub mod api;
pub mod dither;
pub mod grid;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{GrayDitherError, GrayDitherer};
pub use dither::{dither, posterize, FloydSteinberg, Kernel, Posterize, Quantize, QuantizeMethod};
pub use grid::{GridError, IntensityGrid};
pub use output::QuantizedGrid;
pub use palette::{Levels, LevelsError};
pub use preprocess::{downsample, remap, DownsampleError, PreprocessOptions, Preprocessor};
