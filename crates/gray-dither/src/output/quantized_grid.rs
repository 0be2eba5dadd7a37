//! QuantizedGrid struct with cell iteration and preview rendering.

/// A grid whose cells hold palette level values, row-major.
///
/// Grids produced by [`Posterize`](crate::Posterize) and
/// [`FloydSteinberg`](crate::FloydSteinberg) only ever contain values
/// copied from the [`Levels`](crate::Levels) they were quantized against,
/// so exact equality against those levels is reliable.
///
/// # Example
///
/// ```
/// use gray_dither::QuantizedGrid;
///
/// let grid = QuantizedGrid::new(vec![0.0, 1.0, 1.0, 0.0], 2, 2);
///
/// let cells: Vec<_> = grid.cells().collect();
/// assert_eq!(cells[1], (1, 0, 1.0));
/// assert_eq!(grid.to_luma8(), vec![0, 255, 255, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedGrid {
    /// Level values, one per cell, row-major order.
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl QuantizedGrid {
    /// Create a new `QuantizedGrid` from level values.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `values.len() == width * height`.
    pub fn new(values: Vec<f64>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            values.len(),
            width * height,
            "values length ({}) must match width * height ({}x{}={})",
            values.len(),
            width,
            height,
            width * height,
        );
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

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.width + x]
    }

    /// `(x, y, level)` for every cell, top row first, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let width = self.width;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % width, i / width, v))
    }

    /// Render levels as 8-bit gray for previews.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|&v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_row_major() {
        let grid = QuantizedGrid::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 3, 2);
        let coords: Vec<(usize, usize)> = grid.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.get(2, 1), 0.6);
    }

    #[test]
    fn test_to_luma8_round_trips_u8_levels() {
        let grays = [12u8, 94, 180];
        let values = grays.iter().map(|&g| g as f64 / 255.0).collect();
        let grid = QuantizedGrid::new(values, 3, 1);
        assert_eq!(grid.to_luma8(), grays.to_vec());
    }

    #[test]
    fn test_to_luma8_clamps() {
        let grid = QuantizedGrid::new(vec![-0.5, 1.5], 2, 1);
        assert_eq!(grid.to_luma8(), vec![0, 255]);
    }
}
