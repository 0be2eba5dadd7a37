//! Quantized grid <-> placed buildings.

use gray_dither::QuantizedGrid;

use super::codec::{decode_document, encode_document, Blueprint};
use super::schema::{BlueprintDocument, Entry};
use crate::error::{BlueprintError, DecodeError};
use crate::palette::{Palette, X_FIELD, Y_FIELD};

/// A cell recovered from a blueprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCell {
    pub x: usize,
    pub y: usize,
    pub level: f64,
}

/// Turn a quantized grid into a blueprint string.
///
/// Cells are visited row-major; each one contributes its level's template
/// entries with the cell's coordinates filled in. Cells whose level maps to
/// an empty template contribute nothing.
///
/// # Errors
///
/// [`BlueprintError::MissingPaletteLevel`] if a cell holds a value that is
/// not exactly one of the palette's levels. This means the grid was not
/// quantized against this palette.
pub fn encode(grid: &QuantizedGrid, palette: &Palette) -> Result<Blueprint, BlueprintError> {
    let mut entries = Vec::new();
    for (x, y, level) in grid.cells() {
        let template = palette
            .template_for(level)
            .ok_or(BlueprintError::MissingPaletteLevel { x, y, value: level })?;
        entries.extend(template.instantiate(x, y));
    }

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        entries = entries.len(),
        "Placing buildings"
    );

    Ok(encode_document(&BlueprintDocument::with_entries(entries))?)
}

/// Recover the placed cells from a blueprint produced by [`encode`].
///
/// Consecutive entries sharing `(X, Y)` form one cell, which must equal
/// some non-empty template instantiated at that position. Cells whose
/// level has an empty template left no trace and are not returned.
pub fn decode_cells(blueprint: &str, palette: &Palette) -> Result<Vec<PlacedCell>, BlueprintError> {
    let document = decode_document(blueprint)?;
    let entries = document.body.entries;

    let mut cells = Vec::new();
    let mut start = 0;
    while start < entries.len() {
        let (x, y) = position(&entries[start], start)?;
        let mut end = start + 1;
        while end < entries.len() && position(&entries[end], end)? == (x, y) {
            end += 1;
        }

        let group = &entries[start..end];
        let level = palette
            .iter()
            .find(|(_, template)| !template.is_empty() && template.matches(group, x, y))
            .map(|(level, _)| level)
            .ok_or(BlueprintError::UnknownCell { x, y })?;
        cells.push(PlacedCell { x, y, level });

        start = end;
    }

    tracing::debug!(
        entries = entries.len(),
        cells = cells.len(),
        "Matched blueprint cells"
    );
    Ok(cells)
}

fn position(entry: &Entry, index: usize) -> Result<(usize, usize), DecodeError> {
    let coordinate = |field: &'static str| {
        entry
            .get(field)
            .and_then(|v| v.as_u64())
            .and_then(|v| usize::try_from(v).ok())
            .ok_or(DecodeError::InvalidCoordinate { index, field })
    };
    Ok((coordinate(X_FIELD)?, coordinate(Y_FIELD)?))
}
