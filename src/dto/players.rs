use crate::domain::player::{Player, PlayerDetail};
use crate::pagination::Paginated;
use crate::query::PlayerQuery;

/// Everything the players list page needs to render one state.
#[derive(Clone, Debug)]
pub struct PlayersPageData {
    pub players: Paginated<Player>,
    pub query: PlayerQuery,
}

/// Header data of a player detail page; tab contents load separately.
#[derive(Clone, Debug)]
pub struct PlayerPageData {
    pub player: PlayerDetail,
}
