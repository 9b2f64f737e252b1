use crate::CONDENSED_PAGE_SIZE;
use crate::domain::chest_shop::ChestShop;
use crate::domain::region::Region;
use crate::domain::types::TradeType;
use crate::dto::players::{PlayerPageData, PlayersPageData};
use crate::pagination::Paginated;
use crate::query::{PlayerDetailQuery, PlayerQuery};
use crate::repository::PlayerReader;
use crate::repository::errors::ApiError;
use crate::services::{ServiceError, ServiceResult};

/// Loads one state of the players list page.
pub async fn load_page<R>(api: &R, query: &PlayerQuery) -> ServiceResult<PlayersPageData>
where
    R: PlayerReader + Sync + ?Sized,
{
    let page = api.list_players(query).await.map_err(|err| {
        log::error!("failed to list players: {err}");
        ServiceError::from(err)
    })?;

    Ok(PlayersPageData {
        players: Paginated::from_page(page, query.page_size()),
        query: query.clone(),
    })
}

/// Candidate player names for the players search box. Unscoped: the player
/// list is global.
pub async fn player_names<R>(api: &R) -> ServiceResult<Vec<String>>
where
    R: PlayerReader + Sync + ?Sized,
{
    api.player_names().await.map_err(|err| {
        log::error!("failed to fetch player names: {err}");
        ServiceError::from(err)
    })
}

/// Loads the header of a player detail page. A missing player becomes
/// [`ServiceError::PlayerNotFound`]; the API reports this with an empty 204
/// rather than a 404, but the repository already folded that quirk into
/// [`ApiError::NotFound`].
pub async fn load_detail<R>(api: &R, name: &str) -> ServiceResult<PlayerPageData>
where
    R: PlayerReader + Sync + ?Sized,
{
    match api.get_player(name).await {
        Ok(player) => Ok(PlayerPageData { player }),
        Err(ApiError::NotFound) => Err(ServiceError::PlayerNotFound),
        Err(err) => {
            log::error!("failed to fetch player {name}: {err}");
            Err(err.into())
        }
    }
}

/// Chest shops owned by the player, for the items-sold/items-purchased tabs.
pub async fn chest_shops<R>(
    api: &R,
    name: &str,
    query: &PlayerDetailQuery,
    trade_type: TradeType,
) -> ServiceResult<Paginated<ChestShop>>
where
    R: PlayerReader + Sync + ?Sized,
{
    let page = api
        .player_chest_shops(name, trade_type, query.page)
        .await
        .map_err(|err| {
            log::error!("failed to fetch chest shops of player {name}: {err}");
            ServiceError::from(err)
        })?;

    Ok(Paginated::from_page(page, CONDENSED_PAGE_SIZE))
}

/// Regions the player is a mayor of, for the regions tab.
pub async fn regions<R>(
    api: &R,
    name: &str,
    query: &PlayerDetailQuery,
) -> ServiceResult<Paginated<Region>>
where
    R: PlayerReader + Sync + ?Sized,
{
    let page = api.player_regions(name, query.page).await.map_err(|err| {
        log::error!("failed to fetch regions of player {name}: {err}");
        ServiceError::from(err)
    })?;

    Ok(Paginated::from_page(page, CONDENSED_PAGE_SIZE))
}
