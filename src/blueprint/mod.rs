//! Blueprint strings: document schema, transport codec and cell placement.

mod cells;
mod codec;
mod schema;

pub use cells::{decode_cells, encode, PlacedCell};
pub use codec::{decode_document, encode_document, Blueprint};
pub use schema::{
    BlueprintBody, BlueprintDocument, BlueprintIcon, Entry, BUILDING_KIND, GAME_VERSION,
    ICON_SLOTS, PREFIX, SUFFIX,
};
