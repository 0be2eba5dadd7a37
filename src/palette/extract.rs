//! Palette extraction from a reference blueprint.
//!
//! The reference blueprint is a row of building stacks laid out along X.
//! The two outermost X positions are bookends; every slot strictly between
//! them is one palette level, darkest first. An unoccupied slot is a level
//! that needs no building at all.

use std::collections::BTreeMap;

use gray_dither::Levels;

use super::template::{CellTemplate, X_FIELD};
use super::Palette;
use crate::blueprint::{decode_document, Entry};
use crate::error::BlueprintError;

/// Derive a palette from `reference`, pairing its inner X slots with
/// `brightness_levels` (0-255, ascending).
///
/// # Errors
///
/// - [`BlueprintError::Decode`] if the reference does not unpack
/// - [`BlueprintError::EmptyReference`] if it has no entries
/// - [`BlueprintError::InvalidOffset`] if an `X` is not an integer
/// - [`BlueprintError::PaletteSizeMismatch`] if the number of inner slots
///   differs from `brightness_levels.len()`
/// - [`BlueprintError::InvalidLevels`] if `brightness_levels` is not
///   strictly ascending
pub fn extract_palette(reference: &str, brightness_levels: &[u8]) -> Result<Palette, BlueprintError> {
    let document = decode_document(reference)?;
    let mut groups = group_by_offset(document.body.entries)?;

    let (min_offset, max_offset) = match (groups.keys().next(), groups.keys().next_back()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(BlueprintError::EmptyReference),
    };

    let span = max_offset - min_offset - 1;
    if span != brightness_levels.len() as i64 {
        return Err(BlueprintError::PaletteSizeMismatch {
            expected: brightness_levels.len(),
            observed: span,
        });
    }

    let levels = Levels::from_u8(brightness_levels)?;
    let templates: Vec<CellTemplate> = (min_offset + 1..max_offset)
        .map(|offset| {
            groups
                .remove(&offset)
                .map(CellTemplate::from_entries)
                .unwrap_or_default()
        })
        .collect();

    tracing::debug!(
        min_offset,
        max_offset,
        levels = templates.len(),
        empty = templates.iter().filter(|t| t.is_empty()).count(),
        "Extracted palette from reference blueprint"
    );

    Palette::from_parts(levels, templates)
}

/// Bucket entries by their `X` offset (absent = 0), preserving entry order
/// within each bucket.
fn group_by_offset(entries: Vec<Entry>) -> Result<BTreeMap<i64, Vec<Entry>>, BlueprintError> {
    let mut groups: BTreeMap<i64, Vec<Entry>> = BTreeMap::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let offset = match entry.get(X_FIELD) {
            None => 0,
            Some(value) => value
                .as_i64()
                .ok_or(BlueprintError::InvalidOffset { index })?,
        };
        groups.entry(offset).or_default().push(entry);
    }
    Ok(groups)
}
