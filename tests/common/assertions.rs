//! Assertion helpers for tests.

use gray_dither::QuantizedGrid;
use pretty_assertions::assert_eq;
use shapez_pixelart::blueprint::{Blueprint, GAME_VERSION, PREFIX, SUFFIX};
use shapez_pixelart::palette::Palette;

/// Assert the string is framed like a game blueprint and unpacks
pub fn assert_valid_blueprint(blueprint: &Blueprint) {
    let text = blueprint.as_str();
    assert!(
        text.starts_with(PREFIX),
        "Expected {PREFIX:?} prefix, got {:?}",
        &text[..text.len().min(16)]
    );
    assert!(text.ends_with(SUFFIX), "Expected {SUFFIX:?} suffix");

    let document = blueprint
        .document()
        .unwrap_or_else(|e| panic!("Blueprint does not decode at {} stage: {e}", e.stage()));
    assert_eq!(document.version, GAME_VERSION);
    assert_eq!(document.body.binary_version, GAME_VERSION);
    assert_eq!(document.body.kind, "Building");
}

/// Assert every cell holds one of the palette's levels exactly
pub fn assert_palette_exact(grid: &QuantizedGrid, palette: &Palette) {
    for (x, y, level) in grid.cells() {
        assert!(
            palette.template_for(level).is_some(),
            "Cell ({x}, {y}) holds {level}, which is not a palette level"
        );
    }
}
