//! Error type for grid construction.

use std::fmt;

/// Error type for [`IntensityGrid`](super::IntensityGrid) construction.
///
/// Returned when the supplied values cannot form a rectangular grid of
/// finite intensities.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Width or height is zero
    Empty,
    /// Number of values does not match `width * height`
    LengthMismatch {
        /// `width * height`
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },
    /// A value is NaN or infinite
    NonFinite {
        /// Row-major index of the offending value
        index: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have non-zero width and height"),
            GridError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "grid length mismatch: expected {} values, got {}",
                    expected, actual
                )
            }
            GridError::NonFinite { index } => {
                write!(f, "non-finite intensity at index {}", index)
            }
        }
    }
}

impl std::error::Error for GridError {}
