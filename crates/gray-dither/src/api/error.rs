//! Unified error type for the gray-dither public API.
//!
//! [`GrayDitherError`] wraps all error types from the crate into a single
//! enum for convenient `?` propagation in application code.

use crate::grid::GridError;
use crate::palette::LevelsError;
use crate::preprocess::DownsampleError;
use std::fmt;

/// Unified error type for the gray-dither public API.
///
/// # Example
///
/// ```
/// use gray_dither::{GrayDitherError, Levels};
///
/// fn build_levels() -> Result<Levels, GrayDitherError> {
///     let levels = Levels::from_u8(&[0, 128, 255])?;
///     Ok(levels)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GrayDitherError {
    /// Grid construction error (empty, wrong length, non-finite value)
    Grid(GridError),
    /// Level set validation error
    Levels(LevelsError),
    /// Requested output grid is empty or larger than the source
    Downsample(DownsampleError),
}

impl fmt::Display for GrayDitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrayDitherError::Grid(err) => write!(f, "grid error: {}", err),
            GrayDitherError::Levels(err) => write!(f, "palette error: {}", err),
            GrayDitherError::Downsample(err) => write!(f, "downsample error: {}", err),
        }
    }
}

impl std::error::Error for GrayDitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrayDitherError::Grid(err) => Some(err),
            GrayDitherError::Levels(err) => Some(err),
            GrayDitherError::Downsample(err) => Some(err),
        }
    }
}

impl From<GridError> for GrayDitherError {
    fn from(err: GridError) -> Self {
        GrayDitherError::Grid(err)
    }
}

impl From<LevelsError> for GrayDitherError {
    fn from(err: LevelsError) -> Self {
        GrayDitherError::Levels(err)
    }
}

impl From<DownsampleError> for GrayDitherError {
    fn from(err: DownsampleError) -> Self {
        GrayDitherError::Downsample(err)
    }
}
