use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerRef;

/// Reference to a region (town) by name, as embedded in other payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRef {
    pub name: String,
}

/// Corner coordinates of a region's bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A region row from the `regions` list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub server: String,
    pub num_chest_shops: i64,
    pub num_mayors: i64,
    /// Unlisted regions asked for their shops to be hidden from the catalog.
    pub active: bool,
}

/// Payload of the region detail endpoint (`regions/{server}/{name}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetail {
    pub name: String,
    pub server: String,
    pub i_bounds: Bounds,
    pub o_bounds: Bounds,
    pub num_chest_shops: i64,
    pub active: bool,
    pub mayors: Vec<PlayerRef>,
    pub last_updated: DateTime<Utc>,
}
