//! Error types for palette level validation

use std::fmt;

/// Error type for level set validation.
///
/// Returned when the supplied brightness levels cannot form a palette:
/// no levels at all, non-finite values, or levels that are not strictly
/// ascending (which includes duplicates).
#[derive(Debug, Clone, PartialEq)]
pub enum LevelsError {
    /// No levels provided
    Empty,
    /// Level at the specified index is NaN or infinite
    NonFinite {
        /// Index of the offending level
        index: usize,
    },
    /// Level at the specified index is not greater than its predecessor
    NotAscending {
        /// Index of the offending level
        index: usize,
    },
}

impl fmt::Display for LevelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelsError::Empty => write!(f, "palette must contain at least one level"),
            LevelsError::NonFinite { index } => {
                write!(f, "level at index {} is not finite", index)
            }
            LevelsError::NotAscending { index } => {
                write!(
                    f,
                    "level at index {} is not strictly greater than the previous level",
                    index
                )
            }
        }
    }
}

impl std::error::Error for LevelsError {}
