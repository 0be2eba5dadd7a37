//! Palette level set and its error type.

mod error;
mod levels;

pub use error::LevelsError;
pub use levels::Levels;
