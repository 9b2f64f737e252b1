use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::types::PlayerSort;
use crate::query::{QueryState, de_page, de_text_filter, de_vocab, first_page};

/// URL state of the players list page.
///
/// Keys: `q`, `sort`, `page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    /// Selected player name, filled in from a search suggestion.
    #[serde(
        default,
        deserialize_with = "de_text_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "de_vocab")]
    pub sort: PlayerSort,
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
}

impl Default for PlayerQuery {
    fn default() -> Self {
        Self {
            q: None,
            sort: PlayerSort::default(),
            page: 1,
        }
    }
}

impl PlayerQuery {
    pub fn set_name(&mut self, name: Option<String>) {
        self.q = name.filter(|text| !text.is_empty());
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: PlayerSort) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn page_size(&self) -> u32 {
        DEFAULT_PAGE_SIZE
    }
}

impl QueryState for PlayerQuery {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}
