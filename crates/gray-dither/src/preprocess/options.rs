//! Knobs for the downsample and remap stages.

/// Configuration options for grid preprocessing.
///
/// # Defaults
///
/// - Resize: disabled (keep source dimensions)
/// - Brightness range: `None` (use the palette's darkest and brightest levels)
///
/// # Example
///
/// ```
/// use gray_dither::PreprocessOptions;
///
/// let options = PreprocessOptions::new()
///     .resize(54, 54)
///     .brightness_range(0.1, 0.6);
///
/// assert_eq!(options.target_width, Some(54));
/// assert_eq!(options.brightness_range, Some((0.1, 0.6)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreprocessOptions {
    /// Target width for downsampling (None = keep the source size).
    pub target_width: Option<usize>,

    /// Target height for downsampling (None = keep the source size).
    pub target_height: Option<usize>,

    /// Output range for the brightness remap.
    ///
    /// `None` stretches onto `(levels.min(), levels.max())`.
    pub brightness_range: Option<(f64, f64)>,
}

impl PreprocessOptions {
    /// No resize, palette-span remap.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target dimensions for downsampling.
    ///
    /// Both must be non-zero and no larger than the source grid, otherwise
    /// processing fails with
    /// [`DownsampleError::InvalidDimensions`](super::DownsampleError::InvalidDimensions).
    #[inline]
    pub fn resize(mut self, width: usize, height: usize) -> Self {
        self.target_width = Some(width);
        self.target_height = Some(height);
        self
    }

    /// Override the remap output range.
    #[inline]
    pub fn brightness_range(mut self, low: f64, high: f64) -> Self {
        self.brightness_range = Some((low, high));
        self
    }
}
