use shopdb_catalog::domain::types::{
    PlayerSort, RegionSort, RegionTab, ServerFilter, ShopSort, TradeType,
};
use shopdb_catalog::query::{
    PlayerQuery, QueryState, RegionDetailQuery, RegionQuery, ShopQuery,
};

#[test]
fn shop_query_round_trips_through_the_url() {
    let mut query = ShopQuery::default();
    query.set_item(Some("Oak Log".into()));
    query.set_trade_type(TradeType::Sell);
    query.set_server(ServerFilter::Server("main-north".into()));
    query.set_sort(ShopSort::Quantity);
    query.set_hide_unavailable(false);
    query.set_hide_duplicates(false);
    query.set_condense(true);
    query.set_page(6);

    let encoded = query.encode();
    assert_eq!(ShopQuery::decode(&encoded), query);
}

#[test]
fn encoded_state_uses_the_public_key_names() {
    let mut query = ShopQuery::default();
    query.set_hide_unavailable(false);
    let encoded = query.encode();

    assert!(encoded.contains("tradeType=buy"));
    assert!(encoded.contains("hideUnavailable=false"));
    assert!(encoded.contains("hideDuplicates=true"));
    assert!(encoded.contains("condense=false"));
    assert!(encoded.contains("page=1"));
}

#[test]
fn bookmarked_urls_reproduce_state_exactly() {
    let query = ShopQuery::decode("q=Diamond&tradeType=sell&server=main&sort=availability&page=3");
    assert_eq!(query.q.as_deref(), Some("Diamond"));
    assert_eq!(query.trade_type, TradeType::Sell);
    assert_eq!(query.server, ServerFilter::Server("main".into()));
    assert_eq!(query.sort, ShopSort::Availability);
    assert_eq!(query.page, 3);
    // Flags that were never toggled keep their absent-key defaults.
    assert!(query.hide_unavailable);
    assert!(query.hide_duplicates);
    assert!(!query.condense);
}

#[test]
fn every_filter_change_resets_pagination() {
    let mut query = RegionQuery::decode("sort=name&page=14");
    assert_eq!(query.page, 14);
    query.set_server(ServerFilter::Server("main".into()));
    assert_eq!(query.page, 1);

    let mut query = PlayerQuery::decode("page=14");
    query.set_sort(PlayerSort::Name);
    assert_eq!(query.page, 1);

    let mut query = RegionDetailQuery::decode("tab=mayors&page=14");
    query.set_tab(RegionTab::ItemsSold);
    assert_eq!(query.page, 1);
}

#[test]
fn moving_between_pages_touches_nothing_else() {
    let mut query = RegionQuery::decode("q=spawn&sort=num-players&hideUnlisted=false&page=2");
    let before = query.clone();
    query.set_page(3);

    assert_eq!(query.q, before.q);
    assert_eq!(query.sort, before.sort);
    assert_eq!(query.hide_unlisted, before.hide_unlisted);
    assert_eq!(query.page, 3);

    // Setting the same page twice is the same as setting it once.
    let once = query.clone();
    query.set_page(3);
    assert_eq!(query, once);
}

#[test]
fn garbage_in_the_url_fails_soft() {
    let query = ShopQuery::decode("page=over9000&tradeType=lease&sort=karma&condense=maybe");
    assert_eq!(query.page, 1);
    assert_eq!(query.trade_type, TradeType::Buy);
    assert_eq!(query.sort, ShopSort::Price);
    assert!(!query.condense);

    let query = RegionQuery::decode("sort=num-players&hideUnlisted=&page=");
    assert_eq!(query.sort, RegionSort::NumPlayers);
    assert!(query.hide_unlisted);
    assert_eq!(query.page, 1);
}
