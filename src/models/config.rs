use serde::Deserialize;
use std::path::Path;

use crate::assets::{DEFAULT_BRIGHTNESS_LEVELS, DEFAULT_REFERENCE_BLUEPRINT};
use crate::error::ConfigError;
use crate::palette::Palette;
use crate::pipeline::{GenerateOptions, DEFAULT_OUTPUT_SIZE};

/// Generator configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Thumbnail width in cells
    #[serde(default = "default_output_size")]
    pub output_width: usize,

    /// Thumbnail height in cells
    #[serde(default = "default_output_size")]
    pub output_height: usize,

    /// Error-diffusion dithering instead of plain posterization
    #[serde(default = "default_dithering")]
    pub dithering: bool,

    /// Remap target as `[low, high]`, each in 0.0-1.0
    #[serde(default)]
    pub brightness_range: Option<(f64, f64)>,

    /// Custom palette; the built-in one when absent
    #[serde(default)]
    pub palette: Option<PaletteConfig>,
}

fn default_output_size() -> usize {
    DEFAULT_OUTPUT_SIZE
}

fn default_dithering() -> bool {
    true
}

/// Where to take the palette from. Missing fields fall back to the
/// built-in reference blueprint and brightness list.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct PaletteConfig {
    /// Blueprint string with one building stack per level
    #[serde(default)]
    pub reference_blueprint: Option<String>,

    /// Measured brightness (0-255) of each stack, darkest first
    #[serde(default)]
    pub brightness_levels: Option<Vec<u8>>,
}

impl PaletteConfig {
    /// Extract the configured palette.
    pub fn resolve(&self) -> Result<Palette, ConfigError> {
        let reference = self
            .reference_blueprint
            .as_deref()
            .unwrap_or(DEFAULT_REFERENCE_BLUEPRINT);
        let levels = self
            .brightness_levels
            .as_deref()
            .unwrap_or(&DEFAULT_BRIGHTNESS_LEVELS);
        Ok(Palette::extract(reference, levels)?)
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.output_width,
            height = config.output_height,
            dithering = config.dithering,
            custom_palette = config.palette.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Resolve into pipeline options, extracting a custom palette if one
    /// is configured.
    pub fn to_options(&self) -> Result<GenerateOptions, ConfigError> {
        let palette = self.palette.as_ref().map(PaletteConfig::resolve).transpose()?;
        Ok(GenerateOptions {
            output_width: self.output_width,
            output_height: self.output_height,
            palette,
            brightness_range: self.brightness_range,
            dithering: self.dithering,
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_width: DEFAULT_OUTPUT_SIZE,
            output_height: DEFAULT_OUTPUT_SIZE,
            dithering: true,
            brightness_range: None,
            palette: None,
        }
    }
}
