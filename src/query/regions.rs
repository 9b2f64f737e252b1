use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::types::{RegionSort, ServerFilter};
use crate::query::{
    QueryState, de_bool_default_true, de_page, de_text_filter, de_vocab, default_true, first_page,
};

/// URL state of the regions list page.
///
/// Keys: `q`, `server`, `hideUnlisted`, `sort`, `page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionQuery {
    /// Selected region name, filled in from a search suggestion.
    #[serde(
        default,
        deserialize_with = "de_text_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "de_vocab")]
    pub server: ServerFilter,
    #[serde(default = "default_true", deserialize_with = "de_bool_default_true")]
    pub hide_unlisted: bool,
    #[serde(default, deserialize_with = "de_vocab")]
    pub sort: RegionSort,
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
}

impl Default for RegionQuery {
    fn default() -> Self {
        Self {
            q: None,
            server: ServerFilter::default(),
            hide_unlisted: true,
            sort: RegionSort::default(),
            page: 1,
        }
    }
}

impl RegionQuery {
    pub fn set_name(&mut self, name: Option<String>) {
        self.q = name.filter(|text| !text.is_empty());
        self.page = 1;
    }

    pub fn set_server(&mut self, server: ServerFilter) {
        self.server = server;
        self.page = 1;
    }

    pub fn set_hide_unlisted(&mut self, hide: bool) {
        self.hide_unlisted = hide;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: RegionSort) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn page_size(&self) -> u32 {
        DEFAULT_PAGE_SIZE
    }
}

impl QueryState for RegionQuery {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let query = RegionQuery::decode("");
        assert!(query.hide_unlisted);
        assert_eq!(query.sort, RegionSort::NumChestShops);
        assert_eq!(query.server, ServerFilter::All);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn filters_reset_page() {
        let mut query = RegionQuery::decode("page=9");
        query.set_hide_unlisted(false);
        assert_eq!(query.page, 1);

        let mut query = RegionQuery::decode("page=9");
        query.set_sort(RegionSort::Name);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn encode_decode_round_trips() {
        let mut query = RegionQuery::default();
        query.set_name(Some("spawn market".into()));
        query.set_server(ServerFilter::Server("main".into()));
        query.set_hide_unlisted(false);
        query.set_page(3);

        assert_eq!(RegionQuery::decode(&query.encode()), query);
    }
}
