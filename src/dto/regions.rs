use crate::domain::region::{Region, RegionDetail};
use crate::pagination::Paginated;
use crate::query::RegionQuery;

/// Everything the regions list page needs to render one state.
#[derive(Clone, Debug)]
pub struct RegionsPageData {
    pub regions: Paginated<Region>,
    pub query: RegionQuery,
}

/// Header data of a region detail page; tab contents load separately.
#[derive(Clone, Debug)]
pub struct RegionPageData {
    pub region: RegionDetail,
}
