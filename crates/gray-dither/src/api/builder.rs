//! GrayDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`GrayDitherer`] wraps the quantization pipeline with fluent
//! configuration of preprocessing and the quantizer.

use crate::dither::QuantizeMethod;
use crate::grid::IntensityGrid;
use crate::output::QuantizedGrid;
use crate::palette::Levels;
use crate::preprocess::{PreprocessOptions, Preprocessor};

use super::GrayDitherError;

/// High-level quantization builder.
///
/// # Design
///
/// - Constructor requires [`Levels`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`quantize()`](Self::quantize) takes `&self` so the builder is
///   reusable across grids
///
/// # Example
///
/// ```
/// use gray_dither::{GrayDitherer, IntensityGrid, Levels, QuantizeMethod};
///
/// let levels = Levels::from_u8(&[12, 96, 180]).unwrap();
/// let grid = IntensityGrid::new((0..64).map(|i| i as f64 / 63.0).collect(), 8, 8).unwrap();
///
/// let ditherer = GrayDitherer::new(levels)
///     .resize(4, 4)
///     .method(QuantizeMethod::Posterize);
///
/// let result = ditherer.quantize(&grid).unwrap();
/// assert_eq!(result.width(), 4);
/// assert_eq!(result.height(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GrayDitherer {
    levels: Levels,
    preprocess: PreprocessOptions,
    method: QuantizeMethod,
}

impl GrayDitherer {
    /// Create a new ditherer with the given levels.
    ///
    /// Defaults: no resize, remap onto the full level range,
    /// Floyd-Steinberg quantization.
    pub fn new(levels: Levels) -> Self {
        Self {
            levels,
            preprocess: PreprocessOptions::default(),
            method: QuantizeMethod::default(),
        }
    }

    /// Set target dimensions for the block downsample.
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.preprocess = self.preprocess.resize(width, height);
        self
    }

    /// Override the remap output range.
    #[inline]
    pub fn brightness_range(mut self, low: f64, high: f64) -> Self {
        self.preprocess = self.preprocess.brightness_range(low, high);
        self
    }

    /// Set the quantizer.
    #[inline]
    pub fn method(mut self, method: QuantizeMethod) -> Self {
        self.method = method;
        self
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// Downsample, remap and quantize `grid`.
    ///
    /// # Errors
    ///
    /// [`GrayDitherError::Downsample`] if the configured target is larger
    /// than `grid`.
    pub fn quantize(&self, grid: &IntensityGrid) -> Result<QuantizedGrid, GrayDitherError> {
        let preprocessor = Preprocessor::new(&self.levels, self.preprocess.clone());
        let prepared = preprocessor.process(grid)?;
        Ok(self.method.quantizer().quantize(&prepared, &self.levels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::DownsampleError;

    #[test]
    fn test_builder_defaults_to_floyd_steinberg() {
        let ditherer = GrayDitherer::new(Levels::new(&[0.0, 1.0]).unwrap());
        assert_eq!(ditherer.method, QuantizeMethod::FloydSteinberg);
        assert_eq!(ditherer.preprocess, PreprocessOptions::default());
    }

    #[test]
    fn test_builder_is_reusable() {
        let levels = Levels::new(&[0.0, 0.5, 1.0]).unwrap();
        let ditherer = GrayDitherer::new(levels).resize(2, 2);

        let a = IntensityGrid::new(vec![0.0; 16], 4, 4).unwrap();
        let b = IntensityGrid::new((0..16).map(|i| i as f64 / 15.0).collect(), 4, 4).unwrap();

        assert_eq!(ditherer.quantize(&a).unwrap().width(), 2);
        assert_eq!(ditherer.quantize(&b).unwrap().width(), 2);
    }

    #[test]
    fn test_builder_output_is_palette_exact() {
        let levels = Levels::from_u8(&[12, 24, 32, 42, 50, 64]).unwrap();
        let values: Vec<f64> = (0..100).map(|i| ((i * 13) % 100) as f64 / 99.0).collect();
        let grid = IntensityGrid::new(values, 10, 10).unwrap();

        let result = GrayDitherer::new(levels.clone())
            .resize(5, 5)
            .quantize(&grid)
            .unwrap();

        for &v in result.values() {
            assert!(levels.position(v).is_some(), "{v} is not a level");
        }
    }

    #[test]
    fn test_builder_surfaces_invalid_dimensions() {
        let ditherer = GrayDitherer::new(Levels::new(&[0.0, 1.0]).unwrap()).resize(54, 54);
        let grid = IntensityGrid::new(vec![0.5; 100], 10, 10).unwrap();

        let err = ditherer.quantize(&grid).unwrap_err();

        assert_eq!(
            err,
            GrayDitherError::Downsample(DownsampleError::InvalidDimensions {
                source_width: 10,
                source_height: 10,
                target_width: 54,
                target_height: 54,
            })
        );
    }
}
