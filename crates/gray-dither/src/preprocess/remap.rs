//! Affine brightness remapping.

use crate::grid::IntensityGrid;

/// Stretch `grid` so its minimum lands on `low` and its maximum on `high`.
///
/// `out = (v - min) / (max - min) * (high - low) + low`
///
/// A constant grid has no range to stretch; every cell then maps to the
/// midpoint `(low + high) / 2` instead of dividing by zero.
pub fn remap(grid: &IntensityGrid, low: f64, high: f64) -> IntensityGrid {
    let min = grid.min();
    let max = grid.max();
    let span = max - min;

    let values = if span > 0.0 {
        grid.values()
            .iter()
            .map(|&v| (v - min) / span * (high - low) + low)
            .collect()
    } else {
        vec![(low + high) / 2.0; grid.values().len()]
    };

    IntensityGrid::from_parts(values, grid.width(), grid.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_hits_endpoints() {
        let grid = IntensityGrid::new(vec![0.3, 0.5, 0.7, 0.4], 2, 2).unwrap();
        let result = remap(&grid, 0.1, 0.9);

        assert!((result.min() - 0.1).abs() < 1e-12);
        assert!((result.max() - 0.9).abs() < 1e-12);
        assert!((result.get(1, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_remap_is_monotonic() {
        let values = vec![0.9, 0.1, 0.5, 0.3, 0.7, 0.2];
        let grid = IntensityGrid::new(values.clone(), 3, 2).unwrap();
        let result = remap(&grid, 0.05, 0.7);

        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] < values[j] {
                    assert!(result.values()[i] < result.values()[j]);
                }
            }
        }
    }

    #[test]
    fn test_remap_collapsed_range() {
        let grid = IntensityGrid::new(vec![0.0, 1.0], 2, 1).unwrap();
        let result = remap(&grid, 0.4, 0.4);
        assert_eq!(result.values(), &[0.4, 0.4]);
    }

    #[test]
    fn test_remap_constant_grid_maps_to_midpoint() {
        let grid = IntensityGrid::new(vec![0.8; 4], 2, 2).unwrap();
        let result = remap(&grid, 0.2, 0.6);
        for &v in result.values() {
            assert!((v - 0.4).abs() < 1e-12);
            assert!(v.is_finite());
        }
    }
}
