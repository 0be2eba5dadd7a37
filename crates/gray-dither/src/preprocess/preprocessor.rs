//! Preprocessor: downsample then remap.

use super::downsample::downsample;
use super::error::DownsampleError;
use super::options::PreprocessOptions;
use super::remap::remap;
use crate::grid::IntensityGrid;
use crate::palette::Levels;

/// Runs the preprocessing pipeline against a fixed level set.
///
/// The level set is only consulted for the default remap range, so one
/// preprocessor can be reused for any number of grids.
pub struct Preprocessor {
    low: f64,
    high: f64,
    options: PreprocessOptions,
}

impl Preprocessor {
    pub fn new(levels: &Levels, options: PreprocessOptions) -> Self {
        let (low, high) = options
            .brightness_range
            .unwrap_or((levels.min(), levels.max()));
        Self { low, high, options }
    }

    /// Remap output range in effect.
    pub fn brightness_range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Downsample (when a target size is set) and remap `grid`.
    ///
    /// A target is only applied when both dimensions are set; a single
    /// dimension keeps the source size on the other axis.
    pub fn process(&self, grid: &IntensityGrid) -> Result<IntensityGrid, DownsampleError> {
        let resized = match (self.options.target_width, self.options.target_height) {
            (None, None) => None,
            (w, h) => Some(downsample(
                grid,
                w.unwrap_or(grid.width()),
                h.unwrap_or(grid.height()),
            )?),
        };
        let source = resized.as_ref().unwrap_or(grid);
        Ok(remap(source, self.low, self.high))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> Levels {
        Levels::new(&[0.25, 0.5, 0.75]).unwrap()
    }

    #[test]
    fn test_default_range_is_palette_extent() {
        let preprocessor = Preprocessor::new(&levels(), PreprocessOptions::new());
        assert_eq!(preprocessor.brightness_range(), (0.25, 0.75));
    }

    #[test]
    fn test_explicit_range_wins() {
        let options = PreprocessOptions::new().brightness_range(0.0, 1.0);
        let preprocessor = Preprocessor::new(&levels(), options);
        assert_eq!(preprocessor.brightness_range(), (0.0, 1.0));
    }

    #[test]
    fn test_process_without_resize_only_remaps() {
        let grid = IntensityGrid::new(vec![0.0, 1.0, 0.5, 0.5], 2, 2).unwrap();
        let preprocessor = Preprocessor::new(&levels(), PreprocessOptions::new());

        let result = preprocessor.process(&grid).unwrap();

        assert_eq!(result.values(), &[0.25, 0.75, 0.5, 0.5]);
    }

    #[test]
    fn test_process_propagates_invalid_dimensions() {
        let grid = IntensityGrid::new(vec![0.0; 4], 2, 2).unwrap();
        let preprocessor = Preprocessor::new(&levels(), PreprocessOptions::new().resize(3, 3));
        assert!(matches!(
            preprocessor.process(&grid),
            Err(DownsampleError::InvalidDimensions { .. })
        ));
    }
}
