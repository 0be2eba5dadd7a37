use gray_dither::{GrayDitherError, GridError, LevelsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("Quantization error: {0}")]
    Dither(#[from] GrayDitherError),

    #[error("Invalid palette levels: {0}")]
    InvalidLevels(#[from] LevelsError),

    #[error("Palette size mismatch: reference spans {observed} offsets, expected {expected} brightness levels")]
    PaletteSizeMismatch { expected: usize, observed: i64 },

    #[error("Palette has {levels} levels but {templates} templates")]
    TemplateCountMismatch { levels: usize, templates: usize },

    #[error("Reference blueprint contains no entries")]
    EmptyReference,

    #[error("Entry {index} has a non-integer X offset")]
    InvalidOffset { index: usize },

    #[error("Cell ({x}, {y}) holds {value}, which is not a palette level")]
    MissingPaletteLevel { x: usize, y: usize, value: f64 },

    #[error("Cell ({x}, {y}) does not match any palette template")]
    UnknownCell { x: usize, y: usize },

    #[error("Blueprint decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Blueprint encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Failure while unpacking a blueprint string, tagged by stage.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("missing {0:?} prefix")]
    MissingPrefix(&'static str),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("gzip decompression failed: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("entry {index} has no integer {field} coordinate")]
    InvalidCoordinate { index: usize, field: &'static str },
}

impl DecodeError {
    /// Pipeline stage that rejected the input.
    pub fn stage(&self) -> &'static str {
        match self {
            DecodeError::MissingPrefix(_) => "prefix",
            DecodeError::Base64(_) => "base64",
            DecodeError::Gzip(_) => "gzip",
            DecodeError::Utf8(_) => "utf-8",
            DecodeError::Json(_) => "json",
            DecodeError::InvalidCoordinate { .. } => "structure",
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gzip compression failed: {0}")]
    Gzip(#[from] std::io::Error),
}

/// Failure while reading a source image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PNG: {0}")]
    Png(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Invalid image: {0}")]
    Grid(#[from] GridError),
}

/// Failure while writing the preview image.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Failed to write preview: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette in config: {0}")]
    Palette(#[from] BlueprintError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_mismatch_reports_both_sizes() {
        let error = BlueprintError::PaletteSizeMismatch {
            expected: 4,
            observed: 3,
        };
        assert_eq!(
            error.to_string(),
            "Palette size mismatch: reference spans 3 offsets, expected 4 brightness levels"
        );
    }

    #[test]
    fn test_missing_palette_level() {
        let error = BlueprintError::MissingPaletteLevel {
            x: 2,
            y: 5,
            value: 0.25,
        };
        assert_eq!(
            error.to_string(),
            "Cell (2, 5) holds 0.25, which is not a palette level"
        );
    }

    #[test]
    fn test_decode_error_stage() {
        let error = DecodeError::MissingPrefix("SHAPEZ2-3-");
        assert_eq!(error.stage(), "prefix");
        assert_eq!(error.to_string(), "missing \"SHAPEZ2-3-\" prefix");

        let error = DecodeError::Gzip(std::io::Error::other("corrupt deflate stream"));
        assert_eq!(error.stage(), "gzip");
    }

    #[test]
    fn test_blueprint_error_from_decode_error() {
        let error: BlueprintError = DecodeError::MissingPrefix("SHAPEZ2-3-").into();
        match error {
            BlueprintError::Decode(_) => {}
            _ => panic!("Expected Decode variant"),
        }
    }

    #[test]
    fn test_blueprint_error_from_levels_error() {
        let error: BlueprintError = LevelsError::Empty.into();
        assert_eq!(
            error.to_string(),
            "Invalid palette levels: palette must contain at least one level"
        );
    }
}
