use crate::CONDENSED_PAGE_SIZE;
use crate::domain::chest_shop::ChestShop;
use crate::domain::player::Player;
use crate::domain::types::TradeType;
use crate::dto::regions::{RegionPageData, RegionsPageData};
use crate::pagination::Paginated;
use crate::query::{RegionDetailQuery, RegionQuery};
use crate::repository::errors::ApiError;
use crate::repository::{RegionNameScope, RegionReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads one state of the regions list page.
pub async fn load_page<R>(api: &R, query: &RegionQuery) -> ServiceResult<RegionsPageData>
where
    R: RegionReader + Sync + ?Sized,
{
    let page = api.list_regions(query).await.map_err(|err| {
        log::error!("failed to list regions: {err}");
        ServiceError::from(err)
    })?;

    Ok(RegionsPageData {
        regions: Paginated::from_page(page, query.page_size()),
        query: query.clone(),
    })
}

/// Candidate region names for the regions search box.
pub async fn region_names<R>(api: &R, query: &RegionQuery) -> ServiceResult<Vec<String>>
where
    R: RegionReader + Sync + ?Sized,
{
    api.region_names(&RegionNameScope::from(query))
        .await
        .map_err(|err| {
            log::error!("failed to fetch region names: {err}");
            ServiceError::from(err)
        })
}

/// Loads the header of a region detail page. A missing region becomes
/// [`ServiceError::RegionNotFound`] so the caller can route to the dedicated
/// not-found destination.
pub async fn load_detail<R>(
    api: &R,
    name: &str,
    query: &RegionDetailQuery,
) -> ServiceResult<RegionPageData>
where
    R: RegionReader + Sync + ?Sized,
{
    match api.get_region(&query.server, name).await {
        Ok(region) => Ok(RegionPageData { region }),
        Err(ApiError::NotFound) => Err(ServiceError::RegionNotFound),
        Err(err) => {
            log::error!("failed to fetch region {name}: {err}");
            Err(err.into())
        }
    }
}

/// Chest shops traded in the region, for the items-sold/items-purchased tabs.
pub async fn chest_shops<R>(
    api: &R,
    name: &str,
    query: &RegionDetailQuery,
    trade_type: TradeType,
) -> ServiceResult<Paginated<ChestShop>>
where
    R: RegionReader + Sync + ?Sized,
{
    let page = api
        .region_chest_shops(&query.server, name, trade_type, query.page)
        .await
        .map_err(|err| {
            log::error!("failed to fetch chest shops of region {name}: {err}");
            ServiceError::from(err)
        })?;

    Ok(Paginated::from_page(page, CONDENSED_PAGE_SIZE))
}

/// Mayors of the region, for the mayors tab.
pub async fn mayors<R>(
    api: &R,
    name: &str,
    query: &RegionDetailQuery,
) -> ServiceResult<Paginated<Player>>
where
    R: RegionReader + Sync + ?Sized,
{
    let page = api
        .region_mayors(&query.server, name, query.page)
        .await
        .map_err(|err| {
            log::error!("failed to fetch mayors of region {name}: {err}");
            ServiceError::from(err)
        })?;

    Ok(Paginated::from_page(page, CONDENSED_PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::{Region, RegionDetail};
    use crate::dto::page::PageResult;
    use crate::query::QueryState;
    use crate::repository::mock::MockApi;
    use chrono::{TimeZone, Utc};

    fn detail() -> RegionDetail {
        RegionDetail {
            name: "spawn".into(),
            server: "main".into(),
            i_bounds: Default::default(),
            o_bounds: Default::default(),
            num_chest_shops: 4,
            active: true,
            mayors: Vec::new(),
            last_updated: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn load_detail_maps_not_found_to_the_region_route() {
        let mut api = MockApi::new();
        api.expect_get_region()
            .returning(|_, _| Err(ApiError::NotFound));

        let err = load_detail(&api, "nowhere", &RegionDetailQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RegionNotFound));
    }

    #[tokio::test]
    async fn load_detail_uses_the_server_from_the_query() {
        let mut api = MockApi::new();
        api.expect_get_region()
            .withf(|server, name| server == "main-north" && name == "spawn")
            .returning(|_, _| Ok(detail()));

        let query = RegionDetailQuery {
            server: "main-north".into(),
            ..RegionDetailQuery::default()
        };
        let data = load_detail(&api, "spawn", &query).await.unwrap();
        assert_eq!(data.region.name, "spawn");
    }

    #[tokio::test]
    async fn list_page_echoes_the_query() {
        let mut api = MockApi::new();
        api.expect_list_regions().returning(|_| {
            Ok(PageResult {
                page: 2,
                results: vec![Region::default()],
                total_elements: 12,
                total_pages: 2,
            })
        });

        let mut query = RegionQuery::default();
        query.set_page(2);

        let data = load_page(&api, &query).await.unwrap();
        assert_eq!(data.regions.page, 2);
        assert_eq!(data.query, query);
    }

    #[tokio::test]
    async fn tabs_use_the_condensed_page_size() {
        let mut api = MockApi::new();
        api.expect_region_mayors()
            .withf(|server, name, page| server == "main" && name == "spawn" && *page == 3)
            .returning(|_, _, _| {
                Ok(PageResult {
                    page: 3,
                    results: vec![Player::default()],
                    total_elements: 120,
                    total_pages: 3,
                })
            });

        let query = RegionDetailQuery {
            page: 3,
            ..RegionDetailQuery::default()
        };
        let mayors = mayors(&api, "spawn", &query).await.unwrap();
        assert_eq!(mayors.page_size, CONDENSED_PAGE_SIZE);
        assert_eq!(mayors.page, 3);
    }
}
