use std::fmt;

/// Error type for block downsampling.
#[derive(Debug, Clone, PartialEq)]
pub enum DownsampleError {
    /// Target grid is empty or larger than the source on some axis
    InvalidDimensions {
        source_width: usize,
        source_height: usize,
        target_width: usize,
        target_height: usize,
    },
}

impl fmt::Display for DownsampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownsampleError::InvalidDimensions {
                source_width,
                source_height,
                target_width,
                target_height,
            } => write!(
                f,
                "cannot downsample {}x{} to {}x{}: target must be non-empty and no larger than the source",
                source_width, source_height, target_width, target_height
            ),
        }
    }
}

impl std::error::Error for DownsampleError {}
