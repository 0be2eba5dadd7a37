//! Grid preprocessing before quantization.
//!
//! The pipeline has two steps, always in this order:
//!
//! 1. **Downsample** (block mean) - reduce the source grid to the target
//!    dimensions. Upsampling is rejected.
//! 2. **Remap** (affine) - stretch the grid's own min/max onto a brightness
//!    range, by default the palette's darkest and brightest levels, so that
//!    every level is reachable.
//!
//! # Example
//!
//! ```
//! use gray_dither::{IntensityGrid, Levels, PreprocessOptions, Preprocessor};
//!
//! let levels = Levels::new(&[0.2, 0.4, 0.6]).unwrap();
//! let grid = IntensityGrid::new((0..16).map(|i| i as f64 / 15.0).collect(), 4, 4).unwrap();
//!
//! let preprocessor = Preprocessor::new(&levels, PreprocessOptions::new().resize(2, 2));
//! let result = preprocessor.process(&grid).unwrap();
//!
//! assert_eq!(result.width(), 2);
//! assert!((result.min() - 0.2).abs() < 1e-12);
//! assert!((result.max() - 0.6).abs() < 1e-12);
//! ```

mod downsample;
mod error;
mod options;
mod preprocessor;
mod remap;

pub use downsample::downsample;
pub use error::DownsampleError;
pub use options::PreprocessOptions;
pub use preprocessor::Preprocessor;
pub use remap::remap;
