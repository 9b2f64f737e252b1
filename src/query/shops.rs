use serde::{Deserialize, Serialize};

use crate::domain::types::{ServerFilter, ShopSort, TradeType};
use crate::query::{
    QueryState, de_bool_default_false, de_bool_default_true, de_page, de_text_filter, de_vocab,
    default_true, first_page,
};
use crate::{CONDENSED_PAGE_SIZE, DEFAULT_PAGE_SIZE};

/// URL state of the chest-shops list page.
///
/// Keys: `q`, `tradeType`, `server`, `sort`, `hideUnavailable`,
/// `hideDuplicates`, `condense`, `page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopQuery {
    /// Selected item name, filled in from a search suggestion.
    #[serde(
        default,
        deserialize_with = "de_text_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub q: Option<String>,
    #[serde(default, deserialize_with = "de_vocab")]
    pub trade_type: TradeType,
    #[serde(default, deserialize_with = "de_vocab")]
    pub server: ServerFilter,
    #[serde(default, deserialize_with = "de_vocab")]
    pub sort: ShopSort,
    #[serde(default = "default_true", deserialize_with = "de_bool_default_true")]
    pub hide_unavailable: bool,
    #[serde(default = "default_true", deserialize_with = "de_bool_default_true")]
    pub hide_duplicates: bool,
    #[serde(default, deserialize_with = "de_bool_default_false")]
    pub condense: bool,
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
}

impl Default for ShopQuery {
    fn default() -> Self {
        Self {
            q: None,
            trade_type: TradeType::default(),
            server: ServerFilter::default(),
            sort: ShopSort::default(),
            hide_unavailable: true,
            hide_duplicates: true,
            condense: false,
            page: 1,
        }
    }
}

impl ShopQuery {
    /// Applies a search selection; `None` clears the filter.
    pub fn set_item(&mut self, item: Option<String>) {
        self.q = item.filter(|text| !text.is_empty());
        self.page = 1;
    }

    pub fn set_trade_type(&mut self, trade_type: TradeType) {
        self.trade_type = trade_type;
        self.page = 1;
    }

    pub fn set_server(&mut self, server: ServerFilter) {
        self.server = server;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: ShopSort) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_hide_unavailable(&mut self, hide: bool) {
        self.hide_unavailable = hide;
        self.page = 1;
    }

    pub fn set_hide_duplicates(&mut self, hide: bool) {
        self.hide_duplicates = hide;
        self.page = 1;
    }

    pub fn set_condense(&mut self, condense: bool) {
        self.condense = condense;
        self.page = 1;
    }

    /// Requested page size: the condensed table shows more rows per page.
    pub fn page_size(&self) -> u32 {
        if self.condense {
            CONDENSED_PAGE_SIZE
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}

impl QueryState for ShopQuery {
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
    fn absent_keys_take_defaults() {
        let query = ShopQuery::decode("");
        assert_eq!(query, ShopQuery::default());
        assert!(query.hide_unavailable);
        assert!(query.hide_duplicates);
        assert!(!query.condense);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn absent_boolean_reads_true_and_only_literal_false_clears_it() {
        assert!(ShopQuery::decode("hideUnavailable=yes").hide_unavailable);
        assert!(!ShopQuery::decode("hideUnavailable=false").hide_unavailable);
        assert!(!ShopQuery::decode("condense=yes").condense);
        assert!(ShopQuery::decode("condense=true").condense);
    }

    #[test]
    fn malformed_page_falls_back_to_one() {
        assert_eq!(ShopQuery::decode("page=abc").page, 1);
        assert_eq!(ShopQuery::decode("page=0").page, 1);
        assert_eq!(ShopQuery::decode("page=-3").page, 1);
        assert_eq!(ShopQuery::decode("page=7").page, 7);
    }

    #[test]
    fn unknown_vocabulary_falls_back_to_defaults() {
        let query = ShopQuery::decode("tradeType=swap&sort=cheapest");
        assert_eq!(query.trade_type, TradeType::Buy);
        assert_eq!(query.sort, ShopSort::Price);
    }

    #[test]
    fn filters_reset_page() {
        let mut query = ShopQuery::decode("page=12");
        query.set_sort(ShopSort::Quantity);
        assert_eq!(query.page, 1);

        let mut query = ShopQuery::decode("page=12");
        query.set_item(Some("Diamond".into()));
        assert_eq!(query.page, 1);

        let mut query = ShopQuery::decode("page=12");
        query.set_hide_duplicates(false);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn set_page_is_idempotent_and_leaves_filters_alone() {
        let mut query = ShopQuery::decode("q=Oak+Log&tradeType=sell&page=2");
        query.set_page(5);
        let once = query.clone();
        query.set_page(5);
        assert_eq!(query, once);
        assert_eq!(query.q.as_deref(), Some("Oak Log"));
        assert_eq!(query.trade_type, TradeType::Sell);
    }

    #[test]
    fn encode_decode_round_trips() {
        let mut query = ShopQuery::default();
        query.set_item(Some("Iron Ingot".into()));
        query.set_server(ServerFilter::Server("main-north".into()));
        query.set_hide_unavailable(false);
        query.set_condense(true);
        query.set_page(4);

        assert_eq!(ShopQuery::decode(&query.encode()), query);
    }

    #[test]
    fn page_size_follows_condense() {
        let mut query = ShopQuery::default();
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
        query.set_condense(true);
        assert_eq!(query.page_size(), CONDENSED_PAGE_SIZE);
    }
}
