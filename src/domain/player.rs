use serde::{Deserialize, Serialize};

/// Reference to a player by name, as embedded in other payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub name: String,
}

/// A player row from the `players` list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub num_chest_shops: i64,
    pub num_regions: i64,
}

/// Payload of the player detail endpoint.
///
/// Carries the same fields as [`Player`] but is a separate type: the detail
/// endpoint signals a missing player with an empty 204 response, and that
/// mapping happens where this type is produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub name: String,
    pub num_chest_shops: i64,
    pub num_regions: i64,
}
