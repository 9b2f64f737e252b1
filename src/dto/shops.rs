use crate::domain::chest_shop::ChestShop;
use crate::pagination::Paginated;
use crate::query::ShopQuery;

/// Everything the chest-shops list page needs to render one state.
#[derive(Clone, Debug)]
pub struct ShopsPageData {
    pub shops: Paginated<ChestShop>,
    /// Query echoed back so controls can render their current selection.
    pub query: ShopQuery,
}
