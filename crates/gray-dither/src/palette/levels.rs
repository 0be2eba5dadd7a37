//! Ascending set of achievable brightness levels with nearest-level matching.

use super::error::LevelsError;

/// An ordered set of distinct brightness levels.
///
/// Levels are validated once at construction: non-empty, finite, and
/// strictly ascending. The set never changes afterwards, which lets
/// quantizers copy level values verbatim into their output and lets
/// downstream consumers look them up by exact equality.
///
/// # Example
///
/// ```
/// use gray_dither::Levels;
///
/// let levels = Levels::from_u8(&[0, 128, 255]).unwrap();
///
/// assert_eq!(levels.len(), 3);
/// assert_eq!(levels.min(), 0.0);
/// assert_eq!(levels.max(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Levels {
    values: Vec<f64>,
}

impl Levels {
    /// Create a level set.
    ///
    /// # Errors
    ///
    /// - [`LevelsError::Empty`] if `values` is empty
    /// - [`LevelsError::NonFinite`] if a level is NaN or infinite
    /// - [`LevelsError::NotAscending`] if a level is not strictly greater
    ///   than the one before it
    pub fn new(values: &[f64]) -> Result<Self, LevelsError> {
        if values.is_empty() {
            return Err(LevelsError::Empty);
        }
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(LevelsError::NonFinite { index });
            }
            if index > 0 && *value <= values[index - 1] {
                return Err(LevelsError::NotAscending { index });
            }
        }
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Create a level set from 8-bit gray values, each scaled by 1/255.
    pub fn from_u8(grays: &[u8]) -> Result<Self, LevelsError> {
        let values: Vec<f64> = grays.iter().map(|&g| g as f64 / 255.0).collect();
        Self::new(&values)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; an empty level set cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Darkest level.
    #[inline]
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Brightest level.
    #[inline]
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Index of the level exactly equal to `value`, if any.
    pub fn position(&self, value: f64) -> Option<usize> {
        self.values.iter().position(|&level| level == value)
    }

    /// Find the level nearest to `value`.
    ///
    /// Levels are scanned in ascending order and only a strictly smaller
    /// distance replaces the current best, so ties go to the lower level.
    ///
    /// # Returns
    ///
    /// `(index, level)` of the nearest level.
    pub fn find_nearest(&self, value: f64) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = (self.values[0] - value).abs();

        for (i, &level) in self.values.iter().enumerate().skip(1) {
            let dist = (level - value).abs();
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, self.values[best_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Levels::new(&[]), Err(LevelsError::Empty));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        assert_eq!(
            Levels::new(&[0.0, 0.5, 0.5]),
            Err(LevelsError::NotAscending { index: 2 })
        );
    }

    #[test]
    fn test_new_rejects_descending() {
        assert_eq!(
            Levels::new(&[0.5, 0.2]),
            Err(LevelsError::NotAscending { index: 1 })
        );
    }

    #[test]
    fn test_new_rejects_infinite() {
        assert_eq!(
            Levels::new(&[0.0, f64::INFINITY]),
            Err(LevelsError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_from_u8_scales_by_255() {
        let levels = Levels::from_u8(&[12, 180]).unwrap();
        assert_eq!(levels.get(0), 12.0 / 255.0);
        assert_eq!(levels.get(1), 180.0 / 255.0);
    }

    #[test]
    fn test_find_nearest_exact() {
        let levels = Levels::new(&[0.0, 0.25, 0.75, 1.0]).unwrap();
        assert_eq!(levels.find_nearest(0.75), (2, 0.75));
    }

    #[test]
    fn test_find_nearest_tie_prefers_lower() {
        let levels = Levels::new(&[0.0, 1.0]).unwrap();
        assert_eq!(levels.find_nearest(0.5), (0, 0.0));
    }

    #[test]
    fn test_find_nearest_out_of_range() {
        let levels = Levels::new(&[0.2, 0.4, 0.6]).unwrap();
        assert_eq!(levels.find_nearest(-3.0), (0, 0.2));
        assert_eq!(levels.find_nearest(7.0), (2, 0.6));
    }

    #[test]
    fn test_position_is_exact() {
        let levels = Levels::new(&[0.1, 0.2]).unwrap();
        assert_eq!(levels.position(0.2), Some(1));
        assert_eq!(levels.position(0.2 + 1e-12), None);
    }
}
