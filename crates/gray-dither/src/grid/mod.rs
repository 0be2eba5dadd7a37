//! Input grid type.
//!
//! [`IntensityGrid`] is the value passed between preprocessing stages. Each
//! stage consumes a grid by reference and returns a new one.

mod error;
mod intensity_grid;

pub use error::GridError;
pub use intensity_grid::IntensityGrid;
