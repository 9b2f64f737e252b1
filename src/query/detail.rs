use serde::{Deserialize, Serialize};

use crate::domain::types::{PlayerTab, RegionTab};
use crate::query::{QueryState, de_page, de_vocab, first_page};

fn default_region_server() -> String {
    "main".to_string()
}

/// URL state of a region detail page.
///
/// Keys: `server` (defaults to `main` here, unlike the list pages), `tab`,
/// `page`. The page number belongs to whichever tab is active; switching
/// tabs resets it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionDetailQuery {
    #[serde(default = "default_region_server")]
    pub server: String,
    #[serde(default, deserialize_with = "de_vocab")]
    pub tab: RegionTab,
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
}

impl Default for RegionDetailQuery {
    fn default() -> Self {
        Self {
            server: default_region_server(),
            tab: RegionTab::default(),
            page: 1,
        }
    }
}

impl RegionDetailQuery {
    pub fn set_tab(&mut self, tab: RegionTab) {
        self.tab = tab;
        self.page = 1;
    }
}

impl QueryState for RegionDetailQuery {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

/// URL state of a player detail page. Keys: `tab`, `page`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetailQuery {
    #[serde(default, deserialize_with = "de_vocab")]
    pub tab: PlayerTab,
    #[serde(default = "first_page", deserialize_with = "de_page")]
    pub page: u32,
}

impl Default for PlayerDetailQuery {
    fn default() -> Self {
        Self {
            tab: PlayerTab::default(),
            page: 1,
        }
    }
}

impl PlayerDetailQuery {
    pub fn set_tab(&mut self, tab: PlayerTab) {
        self.tab = tab;
        self.page = 1;
    }
}

impl QueryState for PlayerDetailQuery {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_detail_defaults_to_main_and_mayors() {
        let query = RegionDetailQuery::decode("");
        assert_eq!(query.server, "main");
        assert_eq!(query.tab, RegionTab::Mayors);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn switching_tab_resets_page() {
        let mut query = RegionDetailQuery::decode("tab=mayors&page=6");
        query.set_tab(RegionTab::ItemsSold);
        assert_eq!(query.page, 1);
        assert_eq!(query.tab, RegionTab::ItemsSold);

        let mut query = PlayerDetailQuery::decode("page=6");
        query.set_tab(PlayerTab::ItemsPurchased);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn encode_decode_round_trips() {
        let mut query = PlayerDetailQuery::default();
        query.set_tab(PlayerTab::ItemsSold);
        query.set_page(2);
        assert_eq!(PlayerDetailQuery::decode(&query.encode()), query);

        let mut query = RegionDetailQuery::default();
        query.server = "main-north".to_string();
        query.set_tab(RegionTab::ItemsPurchased);
        assert_eq!(RegionDetailQuery::decode(&query.encode()), query);
    }
}
