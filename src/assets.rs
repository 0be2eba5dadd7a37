//! Built-in palette source.
//!
//! The reference blueprint is a single row of building stacks exported from
//! the game, one stack per brightness level between two bookend columns.
//! The brightness of each stack was measured in-game.

use std::sync::OnceLock;

use crate::error::BlueprintError;
use crate::palette::Palette;

/// Reference blueprint the default palette is extracted from.
pub const DEFAULT_REFERENCE_BLUEPRINT: &str = "SHAPEZ2-3-H4sIAFc7m2gA/5yUX2uDMBTFv8tlj+7BP2u7PLZuUNiDTOkGow+h3rUXQpQkDkT87tPZgoVJryUQCPmdmxNychvYgfD9IPBgnYBo4MHVJYKAdUUqJ30ED7aHQvdbsXQSxBdQtxaXfQuerpQaJrAnWaLYVMOAfevBi3aG0HbCBj5BPC49yLr6mZH2FOO3rJTbaodGS7WThqR20HoDupiFvnUXGQQfZPDMrw3lR5xSPd2liv5UwaBKqMSNKaydosPxGUyaWzuYVXteVS7t8zmmV/7h/tgp9/2ujLyqivKkMO4dD0g/aKZFHEPh/AD2fEy2VLK+kfFoDnx2kpaKXEf4WRFOoFchuvBZ2v/kCUU075ar8SsxDIX3/EpuXFfsnrIY2+bmZPmvKEWdT0qeGY72XXsmLU29Q2Opb8d9z27bXwEGAKfFB+6/BQAA$";

/// Measured brightness (0-255) of each stack in [`DEFAULT_REFERENCE_BLUEPRINT`],
/// darkest first.
pub const DEFAULT_BRIGHTNESS_LEVELS: [u8; 16] = [
    12, 24, 32, 42, 50, 64, 72, 82, 88, 94, 106, 120, 135, 160, 170, 180,
];

static DEFAULT_PALETTE: OnceLock<Palette> = OnceLock::new();

/// The built-in palette, extracted on first use.
pub fn default_palette() -> Result<&'static Palette, BlueprintError> {
    if let Some(palette) = DEFAULT_PALETTE.get() {
        return Ok(palette);
    }
    let palette = Palette::extract(DEFAULT_REFERENCE_BLUEPRINT, &DEFAULT_BRIGHTNESS_LEVELS)?;
    Ok(DEFAULT_PALETTE.get_or_init(|| palette))
}
