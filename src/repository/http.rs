use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::CONDENSED_PAGE_SIZE;
use crate::domain::chest_shop::ChestShop;
use crate::domain::player::{Player, PlayerDetail};
use crate::domain::region::{Region, RegionDetail};
use crate::domain::types::TradeType;
use crate::dto::page::PageResult;
use crate::models::config::ClientConfig;
use crate::query::{PlayerQuery, RegionQuery, ShopQuery};
use crate::repository::errors::{ApiError, ApiResult};
use crate::repository::{ChestShopReader, MaterialScope, PlayerReader, RegionNameScope, RegionReader};

/// HTTP implementation of the reader traits against the live marketplace API.
///
/// Every method builds one `GET` under the configured base URL's `/v3` tree.
/// Status handling is shared: 404 becomes [`ApiError::NotFound`], any other
/// non-success status becomes [`ApiError::Status`]. The player detail
/// endpoint additionally treats an empty 204 as not found, a quirk of that
/// endpoint alone.
#[derive(Clone, Debug)]
pub struct ShopDbApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ShopDbApi {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl)?;
            path.pop_if_empty();
            path.push("v3");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    async fn send(&self, url: Url, params: &[(&str, String)]) -> ApiResult<reqwest::Response> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if !status.is_success() => Err(ApiError::Status(status)),
            _ => Ok(response),
        }
    }

    async fn get_json<T>(&self, url: Url, params: &[(&str, String)]) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(url, params).await?;
        Ok(response.json::<T>().await?)
    }
}

fn shop_list_params(query: &ShopQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(item) = &query.q {
        params.push(("material", item.clone()));
    }
    params.push(("tradeType", query.trade_type.as_str().to_string()));
    params.push(("sortBy", query.sort.sort_by().to_string()));
    params.push(("page", query.page.to_string()));
    params.push(("hideUnavailable", query.hide_unavailable.to_string()));
    // The API calls the hide-duplicates flag `distinct`.
    params.push(("distinct", query.hide_duplicates.to_string()));
    params.push(("pageSize", query.page_size().to_string()));
    if let Some(server) = query.server.param() {
        params.push(("server", server.to_string()));
    }
    params
}

fn region_list_params(query: &RegionQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sortBy", query.sort.sort_by().to_string()),
        ("page", query.page.to_string()),
        ("pageSize", query.page_size().to_string()),
        // The API calls the hide-unlisted flag `active`.
        ("active", query.hide_unlisted.to_string()),
    ];
    if let Some(server) = query.server.param() {
        params.push(("server", server.to_string()));
    }
    if let Some(name) = &query.q {
        params.push(("name", name.clone()));
    }
    params
}

fn player_list_params(query: &PlayerQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sortBy", query.sort.sort_by().to_string()),
        ("page", query.page.to_string()),
        ("pageSize", query.page_size().to_string()),
    ];
    if let Some(name) = &query.q {
        params.push(("name", name.clone()));
    }
    params
}

fn tab_params(trade_type: Option<TradeType>, page: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(trade_type) = trade_type {
        params.push(("tradeType", trade_type.as_str().to_string()));
    }
    params.push(("page", page.to_string()));
    params.push(("pageSize", CONDENSED_PAGE_SIZE.to_string()));
    params
}

#[async_trait]
impl ChestShopReader for ShopDbApi {
    async fn list_chest_shops(&self, query: &ShopQuery) -> ApiResult<PageResult<ChestShop>> {
        let url = self.endpoint(&["chest-shops"])?;
        self.get_json(url, &shop_list_params(query)).await
    }

    async fn material_names(&self, scope: &MaterialScope) -> ApiResult<Vec<String>> {
        let url = self.endpoint(&["chest-shops", "material-names"])?;
        let mut params = vec![("tradeType", scope.trade_type.as_str().to_string())];
        if let Some(server) = scope.server.param() {
            params.push(("server", server.to_string()));
        }
        self.get_json(url, &params).await
    }
}

#[async_trait]
impl RegionReader for ShopDbApi {
    async fn list_regions(&self, query: &RegionQuery) -> ApiResult<PageResult<Region>> {
        let url = self.endpoint(&["regions"])?;
        self.get_json(url, &region_list_params(query)).await
    }

    async fn region_names(&self, scope: &RegionNameScope) -> ApiResult<Vec<String>> {
        let url = self.endpoint(&["regions", "region-names"])?;
        let mut params = vec![("active", scope.active.to_string())];
        if let Some(server) = scope.server.param() {
            params.push(("server", server.to_string()));
        }
        self.get_json(url, &params).await
    }

    async fn get_region(&self, server: &str, name: &str) -> ApiResult<RegionDetail> {
        let url = self.endpoint(&["regions", server, &name.to_lowercase()])?;
        self.get_json(url, &[]).await
    }

    async fn region_chest_shops(
        &self,
        server: &str,
        name: &str,
        trade_type: TradeType,
        page: u32,
    ) -> ApiResult<PageResult<ChestShop>> {
        let url = self.endpoint(&["regions", server, &name.to_lowercase(), "chest-shops"])?;
        self.get_json(url, &tab_params(Some(trade_type), page)).await
    }

    async fn region_mayors(
        &self,
        server: &str,
        name: &str,
        page: u32,
    ) -> ApiResult<PageResult<Player>> {
        let url = self.endpoint(&["regions", server, &name.to_lowercase(), "players"])?;
        self.get_json(url, &tab_params(None, page)).await
    }
}

#[async_trait]
impl PlayerReader for ShopDbApi {
    async fn list_players(&self, query: &PlayerQuery) -> ApiResult<PageResult<Player>> {
        let url = self.endpoint(&["players"])?;
        self.get_json(url, &player_list_params(query)).await
    }

    async fn player_names(&self) -> ApiResult<Vec<String>> {
        let url = self.endpoint(&["players", "player-names"])?;
        self.get_json(url, &[]).await
    }

    async fn get_player(&self, name: &str) -> ApiResult<PlayerDetail> {
        let url = self.endpoint(&["players", &name.to_lowercase()])?;
        let response = self.send(url, &[]).await?;

        // This endpoint reports a missing player as an empty 204 success.
        if response.status() == StatusCode::NO_CONTENT {
            return Err(ApiError::NotFound);
        }

        Ok(response.json::<PlayerDetail>().await?)
    }

    async fn player_chest_shops(
        &self,
        name: &str,
        trade_type: TradeType,
        page: u32,
    ) -> ApiResult<PageResult<ChestShop>> {
        let url = self.endpoint(&["players", &name.to_lowercase(), "chest-shops"])?;
        self.get_json(url, &tab_params(Some(trade_type), page)).await
    }

    async fn player_regions(&self, name: &str, page: u32) -> ApiResult<PageResult<Region>> {
        let url = self.endpoint(&["players", &name.to_lowercase(), "regions"])?;
        self.get_json(url, &tab_params(None, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ServerFilter, ShopSort};
    use crate::query::QueryState;

    fn value<'a>(params: &'a [(&str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn shop_params_cover_every_filter() {
        let mut query = ShopQuery::default();
        query.set_item(Some("Diamond".into()));
        query.set_sort(ShopSort::Availability);
        query.set_page(3);

        let params = shop_list_params(&query);
        assert_eq!(value(&params, "material"), Some("Diamond"));
        assert_eq!(value(&params, "tradeType"), Some("buy"));
        assert_eq!(value(&params, "sortBy"), Some("quantity-available"));
        assert_eq!(value(&params, "page"), Some("3"));
        assert_eq!(value(&params, "hideUnavailable"), Some("true"));
        assert_eq!(value(&params, "distinct"), Some("true"));
        assert_eq!(value(&params, "pageSize"), Some("9"));
    }

    #[test]
    fn all_servers_sends_no_server_param() {
        let params = shop_list_params(&ShopQuery::default());
        assert_eq!(value(&params, "server"), None);
        assert_eq!(value(&params, "material"), None);

        let params = region_list_params(&RegionQuery::default());
        assert_eq!(value(&params, "server"), None);
    }

    #[test]
    fn named_server_is_forwarded() {
        let mut query = ShopQuery::default();
        query.set_server(ServerFilter::Server("main-north".into()));
        let params = shop_list_params(&query);
        assert_eq!(value(&params, "server"), Some("main-north"));
    }

    #[test]
    fn condensed_view_requests_larger_pages() {
        let mut query = ShopQuery::default();
        query.set_condense(true);
        let params = shop_list_params(&query);
        assert_eq!(value(&params, "pageSize"), Some("50"));
    }

    #[test]
    fn region_params_use_wire_names() {
        let mut query = RegionQuery::default();
        query.set_name(Some("spawn".into()));
        query.set_hide_unlisted(false);

        let params = region_list_params(&query);
        assert_eq!(value(&params, "active"), Some("false"));
        assert_eq!(value(&params, "name"), Some("spawn"));
        assert_eq!(value(&params, "sortBy"), Some("num-chest-shops"));
        assert_eq!(value(&params, "pageSize"), Some("9"));
    }

    #[test]
    fn tab_params_always_use_the_condensed_page_size() {
        let params = tab_params(Some(TradeType::Sell), 2);
        assert_eq!(value(&params, "tradeType"), Some("sell"));
        assert_eq!(value(&params, "page"), Some("2"));
        assert_eq!(value(&params, "pageSize"), Some("50"));

        let params = tab_params(None, 1);
        assert_eq!(value(&params, "tradeType"), None);
    }
}
