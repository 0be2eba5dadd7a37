//! Blueprint document shape as accepted by the game.
//!
//! Field names and constants are copied from a blueprint exported by the
//! game itself. Struct field order is serialization order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag in front of every blueprint string.
pub const PREFIX: &str = "SHAPEZ2-3-";

/// Terminator appended after the base64 payload.
pub const SUFFIX: &str = "$";

/// Game build the document claims to come from (`V` and `BinaryVersion`).
pub const GAME_VERSION: u32 = 1122;

/// `$type` of a building blueprint.
pub const BUILDING_KIND: &str = "Building";

/// Number of icon slots shown for a blueprint.
pub const ICON_SLOTS: usize = 4;

/// One placed building: `T` (type), optional `X`, `Y`, `L` (layer), `R`
/// (rotation) and whatever else the game stores. Key order is preserved.
pub type Entry = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintDocument {
    #[serde(rename = "V")]
    pub version: u32,

    #[serde(rename = "BP")]
    pub body: BlueprintBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintBody {
    #[serde(rename = "$type")]
    pub kind: String,

    #[serde(rename = "Icon", default)]
    pub icon: BlueprintIcon,

    #[serde(rename = "Entries", default)]
    pub entries: Vec<Entry>,

    #[serde(rename = "BinaryVersion")]
    pub binary_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintIcon {
    #[serde(rename = "Data")]
    pub data: Vec<Option<String>>,
}

impl Default for BlueprintIcon {
    fn default() -> Self {
        Self {
            data: vec![None; ICON_SLOTS],
        }
    }
}

impl BlueprintDocument {
    /// Building blueprint with a blank icon around `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            version: GAME_VERSION,
            body: BlueprintBody {
                kind: BUILDING_KIND.to_string(),
                icon: BlueprintIcon::default(),
                entries,
                binary_version: GAME_VERSION,
            },
        }
    }
}
