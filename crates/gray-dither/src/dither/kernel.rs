//! Diffusion weights for error-diffusing quantizers.
//!
//! A kernel specifies how quantization error is distributed to
//! neighbouring cells that have not been processed yet.

/// Where a cell's quantization error goes.
///
/// Each entry is an offset `(dx, dy)` and a weight numerator; a neighbour
/// receives `error * weight / divisor`.
///
/// # Reach
///
/// [`reach()`](Kernel::reach) reports how far the kernel extends left,
/// right and down. A cell only diffuses when every target lies inside the
/// grid, which is what keeps edge cells from diffusing at all.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)`; `dx > 0` is right, `dy > 0` is a later row.
    pub entries: &'static [(i32, i32, u8)],

    /// Shared denominator of all weights.
    pub divisor: u8,
}

impl Kernel {
    /// `(left, right, down)` extent of the kernel in cells.
    pub fn reach(&self) -> (usize, usize, usize) {
        let mut left = 0;
        let mut right = 0;
        let mut down = 0;
        for &(dx, dy, _) in self.entries {
            if dx < 0 {
                left = left.max((-dx) as usize);
            } else {
                right = right.max(dx as usize);
            }
            down = down.max(dy as usize);
        }
        (left, right, down)
    }

    /// Whether every target of a cell at `(x, y)` lies inside the grid.
    #[inline]
    pub fn fits(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        let (left, right, down) = self.reach();
        x >= left && x + right < width && y + down < height
    }
}

/// Classic Floyd-Steinberg weights, all of the error in sixteenths.
///
/// ```text
///    .   *   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_weights_sum_to_divisor() {
        let total: u32 = FLOYD_STEINBERG.entries.iter().map(|e| e.2 as u32).sum();
        assert_eq!(total, FLOYD_STEINBERG.divisor as u32);
    }

    #[test]
    fn test_floyd_steinberg_reach() {
        assert_eq!(FLOYD_STEINBERG.reach(), (1, 1, 1));
    }

    #[test]
    fn test_fits_excludes_edges() {
        // 4x3 grid: only x in 1..=2 and y in 0..=1 diffuse
        let k = FLOYD_STEINBERG;
        assert!(k.fits(1, 0, 4, 3));
        assert!(k.fits(2, 1, 4, 3));
        assert!(!k.fits(0, 0, 4, 3), "first column");
        assert!(!k.fits(3, 0, 4, 3), "last column");
        assert!(!k.fits(1, 2, 4, 3), "last row");
    }

    #[test]
    fn test_fits_narrow_grid() {
        // Two columns have no interior
        assert!(!FLOYD_STEINBERG.fits(0, 0, 2, 5));
        assert!(!FLOYD_STEINBERG.fits(1, 0, 2, 5));
    }
}
