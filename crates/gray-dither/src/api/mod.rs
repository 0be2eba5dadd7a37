//! Public API for the gray-dither crate.
//!
//! This module provides the high-level API: [`GrayDitherer`] builder and
//! [`GrayDitherError`] unified error type.

mod builder;
mod error;

pub use builder::GrayDitherer;
pub use error::GrayDitherError;
