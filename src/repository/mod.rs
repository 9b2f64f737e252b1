//! Contract with the remote marketplace API.
//!
//! The API is owned externally; these traits are the black-box boundary the
//! rest of the crate programs against. [`http::ShopDbApi`] is the real
//! implementation; the `mock` module provides mockall doubles for service
//! tests.

use async_trait::async_trait;

use crate::domain::chest_shop::ChestShop;
use crate::domain::player::{Player, PlayerDetail};
use crate::domain::region::{Region, RegionDetail};
use crate::domain::types::{ServerFilter, TradeType};
use crate::dto::page::PageResult;
use crate::query::{PlayerQuery, RegionQuery, ShopQuery};
use crate::repository::errors::ApiResult;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use http::ShopDbApi;

/// Scope of a material-name candidate set. Name lists are fetched once per
/// scope and kept only for the lifetime of the search box using them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialScope {
    pub trade_type: TradeType,
    pub server: ServerFilter,
}

impl From<&ShopQuery> for MaterialScope {
    fn from(query: &ShopQuery) -> Self {
        Self {
            trade_type: query.trade_type,
            server: query.server.clone(),
        }
    }
}

/// Scope of a region-name candidate set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionNameScope {
    /// Mirrors the `active` request parameter: when true, unlisted regions
    /// are left out of the candidate set.
    pub active: bool,
    pub server: ServerFilter,
}

impl From<&RegionQuery> for RegionNameScope {
    fn from(query: &RegionQuery) -> Self {
        Self {
            active: query.hide_unlisted,
            server: query.server.clone(),
        }
    }
}

#[async_trait]
pub trait ChestShopReader {
    /// One page of chest shops for the given list-page state.
    async fn list_chest_shops(&self, query: &ShopQuery) -> ApiResult<PageResult<ChestShop>>;

    /// Material names available within the scope, for search suggestions.
    async fn material_names(&self, scope: &MaterialScope) -> ApiResult<Vec<String>>;
}

#[async_trait]
pub trait RegionReader {
    async fn list_regions(&self, query: &RegionQuery) -> ApiResult<PageResult<Region>>;

    async fn region_names(&self, scope: &RegionNameScope) -> ApiResult<Vec<String>>;

    /// Region detail; a missing region surfaces as [`errors::ApiError::NotFound`]
    /// (the endpoint answers 404).
    async fn get_region(&self, server: &str, name: &str) -> ApiResult<RegionDetail>;

    async fn region_chest_shops(
        &self,
        server: &str,
        name: &str,
        trade_type: TradeType,
        page: u32,
    ) -> ApiResult<PageResult<ChestShop>>;

    async fn region_mayors(
        &self,
        server: &str,
        name: &str,
        page: u32,
    ) -> ApiResult<PageResult<Player>>;
}

#[async_trait]
pub trait PlayerReader {
    async fn list_players(&self, query: &PlayerQuery) -> ApiResult<PageResult<Player>>;

    async fn player_names(&self) -> ApiResult<Vec<String>>;

    /// Player detail; a missing player surfaces as [`errors::ApiError::NotFound`]
    /// (the endpoint answers an empty 204, not a 404).
    async fn get_player(&self, name: &str) -> ApiResult<PlayerDetail>;

    async fn player_chest_shops(
        &self,
        name: &str,
        trade_type: TradeType,
        page: u32,
    ) -> ApiResult<PageResult<ChestShop>>;

    async fn player_regions(&self, name: &str, page: u32) -> ApiResult<PageResult<Region>>;
}
