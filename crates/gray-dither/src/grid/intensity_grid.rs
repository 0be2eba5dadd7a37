//! Row-major grid of scalar intensities.

use super::error::GridError;

/// A rectangular grid of grayscale intensities, row-major.
///
/// Values loaded from an image lie in `[0, 1]`. The grid itself only
/// enforces that values are finite: a remapped grid may legitimately use a
/// caller-chosen brightness range.
///
/// # Example
///
/// ```
/// use gray_dither::IntensityGrid;
///
/// let grid = IntensityGrid::new(vec![0.0, 0.25, 0.5, 1.0], 2, 2).unwrap();
///
/// assert_eq!(grid.get(1, 0), 0.25);
/// assert_eq!(grid.min(), 0.0);
/// assert_eq!(grid.max(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl IntensityGrid {
    /// Create a grid from row-major values.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if `width` or `height` is zero
    /// - [`GridError::LengthMismatch`] if `values.len() != width * height`
    /// - [`GridError::NonFinite`] if any value is NaN or infinite
    pub fn new(values: Vec<f64>, width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if values.len() != width * height {
            return Err(GridError::LengthMismatch {
                expected: width * height,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(GridError::NonFinite { index });
        }
        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Create a grid from 8-bit luma samples, scaled to `[0, 1]`.
    pub fn from_luma8(luma: &[u8], width: usize, height: usize) -> Result<Self, GridError> {
        let values = luma.iter().map(|&v| v as f64 / 255.0).collect();
        Self::new(values, width, height)
    }

    /// Build a grid from values already known to be well-formed.
    pub(crate) fn from_parts(values: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            values,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.values[y * self.width + x]
    }

    /// Row-major values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest value in the grid.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value in the grid.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
