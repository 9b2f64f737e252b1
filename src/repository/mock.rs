//! Mock API implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::chest_shop::ChestShop;
use crate::domain::player::{Player, PlayerDetail};
use crate::domain::region::{Region, RegionDetail};
use crate::domain::types::TradeType;
use crate::dto::page::PageResult;
use crate::query::{PlayerQuery, RegionQuery, ShopQuery};
use crate::repository::errors::ApiResult;
use crate::repository::{
    ChestShopReader, MaterialScope, PlayerReader, RegionNameScope, RegionReader,
};

mock! {
    pub Api {}

    #[async_trait]
    impl ChestShopReader for Api {
        async fn list_chest_shops(&self, query: &ShopQuery) -> ApiResult<PageResult<ChestShop>>;
        async fn material_names(&self, scope: &MaterialScope) -> ApiResult<Vec<String>>;
    }

    #[async_trait]
    impl RegionReader for Api {
        async fn list_regions(&self, query: &RegionQuery) -> ApiResult<PageResult<Region>>;
        async fn region_names(&self, scope: &RegionNameScope) -> ApiResult<Vec<String>>;
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
    impl PlayerReader for Api {
        async fn list_players(&self, query: &PlayerQuery) -> ApiResult<PageResult<Player>>;
        async fn player_names(&self) -> ApiResult<Vec<String>>;
        async fn get_player(&self, name: &str) -> ApiResult<PlayerDetail>;
        async fn player_chest_shops(
            &self,
            name: &str,
            trade_type: TradeType,
            page: u32,
        ) -> ApiResult<PageResult<ChestShop>>;
        async fn player_regions(&self, name: &str, page: u32) -> ApiResult<PageResult<Region>>;
    }
}
