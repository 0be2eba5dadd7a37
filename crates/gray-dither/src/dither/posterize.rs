//! Nearest-level posterization.

use crate::grid::IntensityGrid;
use crate::output::QuantizedGrid;
use crate::palette::Levels;

use super::Quantize;

/// Maps every cell independently to its nearest level.
///
/// Ties go to the lower level. The result is idempotent: posterizing a
/// posterized grid against the same levels changes nothing.
pub struct Posterize;

impl Quantize for Posterize {
    fn quantize(&self, grid: &IntensityGrid, levels: &Levels) -> QuantizedGrid {
        let values = grid
            .values()
            .iter()
            .map(|&v| levels.find_nearest(v).1)
            .collect();
        QuantizedGrid::new(values, grid.width(), grid.height())
    }
}
