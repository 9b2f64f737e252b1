use serde::{Deserialize, Serialize};

/// Paginated payload shape shared by every list endpoint of the remote API.
///
/// The API owns this contract; a received page is never mutated, only
/// replaced wholesale by the next fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_elements: i64,
    pub total_pages: u32,
}
