//! Transport encoding: `PREFIX + base64(gzip(json)) + SUFFIX`.

use std::fmt;
use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use super::schema::{BlueprintDocument, PREFIX, SUFFIX};
use crate::error::{DecodeError, EncodeError};

/// A finished blueprint string, ready to paste into the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint(String);

impl Blueprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Unpack the document again.
    pub fn document(&self) -> Result<BlueprintDocument, DecodeError> {
        decode_document(&self.0)
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Blueprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unpack a blueprint string into its document.
///
/// Surrounding whitespace and the trailing `$` are optional.
pub fn decode_document(text: &str) -> Result<BlueprintDocument, DecodeError> {
    let payload = text
        .trim()
        .strip_prefix(PREFIX)
        .ok_or(DecodeError::MissingPrefix(PREFIX))?;
    let payload = payload.strip_suffix(SUFFIX).unwrap_or(payload);

    let compressed = STANDARD.decode(payload)?;

    let mut json = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(DecodeError::Gzip)?;

    let json = String::from_utf8(json)?;
    let document: BlueprintDocument = serde_json::from_str(&json)?;

    tracing::debug!(
        compressed = compressed.len(),
        json = json.len(),
        entries = document.body.entries.len(),
        "Decoded blueprint"
    );
    Ok(document)
}

/// Pack a document into a blueprint string.
pub fn encode_document(document: &BlueprintDocument) -> Result<Blueprint, EncodeError> {
    let json = serde_json::to_vec(document)?;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    tracing::debug!(
        json = json.len(),
        compressed = compressed.len(),
        entries = document.body.entries.len(),
        "Encoded blueprint"
    );
    Ok(Blueprint(format!(
        "{PREFIX}{}{SUFFIX}",
        STANDARD.encode(compressed)
    )))
}
