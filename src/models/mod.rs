pub mod config;

pub use config::{GeneratorConfig, PaletteConfig};
