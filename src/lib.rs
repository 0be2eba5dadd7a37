//! shapez-pixelart - grayscale images as shapez 2 blueprints
//!
//! Downsamples an image to a small grid, quantizes every cell to one of the
//! brightness levels achievable with in-game buildings, and packs the
//! resulting building layout into a blueprint string the game can paste.

pub mod assets;
pub mod blueprint;
pub mod error;
pub mod models;
pub mod palette;
pub mod pipeline;
pub mod rendering;

pub use blueprint::{decode_cells, encode, Blueprint, PlacedCell};
pub use error::{BlueprintError, ConfigError, DecodeError, EncodeError, LoadError, PreviewError};
pub use models::GeneratorConfig;
pub use palette::{CellTemplate, Palette};
pub use pipeline::{generate, generate_with_preview, GenerateOptions};
