//! Image to blueprint in one call.

use gray_dither::{GrayDitherer, IntensityGrid, QuantizeMethod, QuantizedGrid};

use crate::assets::default_palette;
use crate::blueprint::{encode, Blueprint};
use crate::error::BlueprintError;
use crate::palette::Palette;

/// Default thumbnail edge, in cells.
pub const DEFAULT_OUTPUT_SIZE: usize = 54;

/// Knobs for [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub output_width: usize,
    pub output_height: usize,
    /// Palette to quantize against; the built-in one when `None`.
    pub palette: Option<Palette>,
    /// Remap target `(low, high)`; the palette's own span when `None`.
    pub brightness_range: Option<(f64, f64)>,
    /// Floyd-Steinberg when true, nearest-level posterization otherwise.
    pub dithering: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_SIZE,
            output_height: DEFAULT_OUTPUT_SIZE,
            palette: None,
            brightness_range: None,
            dithering: true,
        }
    }
}

/// Downsample, remap, quantize and encode `grid` into a blueprint string.
///
/// # Errors
///
/// - [`BlueprintError::Dither`] if the output size exceeds the image
/// - [`BlueprintError::PaletteSizeMismatch`] and friends if the built-in
///   palette cannot be derived
pub fn generate(grid: &IntensityGrid, options: &GenerateOptions) -> Result<Blueprint, BlueprintError> {
    generate_with_preview(grid, options).map(|(blueprint, _)| blueprint)
}

/// Like [`generate`], also returning the quantized thumbnail.
pub fn generate_with_preview(
    grid: &IntensityGrid,
    options: &GenerateOptions,
) -> Result<(Blueprint, QuantizedGrid), BlueprintError> {
    let palette = match &options.palette {
        Some(palette) => palette,
        None => default_palette()?,
    };

    let method = QuantizeMethod::from_dithering(options.dithering);
    let mut ditherer = GrayDitherer::new(palette.levels().clone())
        .resize(options.output_width, options.output_height)
        .method(method);
    if let Some((low, high)) = options.brightness_range {
        ditherer = ditherer.brightness_range(low, high);
    }

    let quantized = ditherer.quantize(grid)?;
    let blueprint = encode(&quantized, palette)?;

    tracing::info!(
        source_width = grid.width(),
        source_height = grid.height(),
        width = quantized.width(),
        height = quantized.height(),
        levels = palette.len(),
        ?method,
        length = blueprint.as_str().len(),
        "Generated blueprint"
    );
    Ok((blueprint, quantized))
}
