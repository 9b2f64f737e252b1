use crate::dto::shops::ShopsPageData;
use crate::pagination::Paginated;
use crate::query::ShopQuery;
use crate::repository::{ChestShopReader, MaterialScope};
use crate::services::{ServiceError, ServiceResult};

/// Loads one state of the chest-shops list page.
pub async fn load_page<R>(api: &R, query: &ShopQuery) -> ServiceResult<ShopsPageData>
where
    R: ChestShopReader + Sync + ?Sized,
{
    let page = api.list_chest_shops(query).await.map_err(|err| {
        log::error!("failed to list chest shops: {err}");
        ServiceError::from(err)
    })?;

    Ok(ShopsPageData {
        shops: Paginated::from_page(page, query.page_size()),
        query: query.clone(),
    })
}

/// Candidate material names for the shops search box, scoped to the current
/// trade type and server selection.
pub async fn material_names<R>(api: &R, query: &ShopQuery) -> ServiceResult<Vec<String>>
where
    R: ChestShopReader + Sync + ?Sized,
{
    api.material_names(&MaterialScope::from(query))
        .await
        .map_err(|err| {
            log::error!("failed to fetch material names: {err}");
            ServiceError::from(err)
        })
}
