//! Closed vocabularies shared by query states and API requests.
//!
//! Each enum knows two spellings: the value used in the browser-facing query
//! string (`as_str`) and, where the remote API uses a different word, the
//! value sent on the wire (`sort_by`). Parsing is strict here; query-state
//! deserialization falls back to defaults on unrecognized input.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Raised when a vocabulary value does not match any known variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Side of the chest-shop trade the viewer is interested in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    #[default]
    Buy,
    Sell,
}

impl TradeType {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
        }
    }
}

impl Display for TradeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            other => Err(UnknownVariant::new("trade type", other)),
        }
    }
}

/// Server selection on list pages. `All` is a pure client-side notion: the
/// API expects the `server` parameter to be omitted entirely in that case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServerFilter {
    #[default]
    All,
    Server(String),
}

impl ServerFilter {
    pub fn as_str(&self) -> &str {
        match self {
            ServerFilter::All => "all",
            ServerFilter::Server(name) => name,
        }
    }

    /// Value for the `server` request parameter, `None` when filtering on all
    /// servers.
    pub fn param(&self) -> Option<&str> {
        match self {
            ServerFilter::All => None,
            ServerFilter::Server(name) => Some(name),
        }
    }
}

impl Display for ServerFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServerFilter {
    type Err = UnknownVariant;

    /// Never fails: any non-`all` value names a server.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(ServerFilter::All),
            name => Ok(ServerFilter::Server(name.to_string())),
        }
    }
}

impl Serialize for ServerFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sort orders offered on the chest-shops page. The query string uses short
/// labels; the API expects different identifiers (see [`ShopSort::sort_by`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopSort {
    #[default]
    Price,
    Quantity,
    Availability,
}

impl ShopSort {
    pub fn as_str(self) -> &'static str {
        match self {
            ShopSort::Price => "price",
            ShopSort::Quantity => "quantity",
            ShopSort::Availability => "availability",
        }
    }

    /// `sortBy` value understood by the chest-shops endpoint.
    pub fn sort_by(self) -> &'static str {
        match self {
            ShopSort::Price => "best-price",
            ShopSort::Quantity => "quantity",
            ShopSort::Availability => "quantity-available",
        }
    }
}

impl FromStr for ShopSort {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "price" => Ok(ShopSort::Price),
            "quantity" => Ok(ShopSort::Quantity),
            "availability" => Ok(ShopSort::Availability),
            other => Err(UnknownVariant::new("shop sort", other)),
        }
    }
}

/// Sort orders for the regions page; query-string and wire spellings match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionSort {
    #[default]
    NumChestShops,
    NumPlayers,
    Name,
}

impl RegionSort {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionSort::NumChestShops => "num-chest-shops",
            RegionSort::NumPlayers => "num-players",
            RegionSort::Name => "name",
        }
    }

    pub fn sort_by(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for RegionSort {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "num-chest-shops" => Ok(RegionSort::NumChestShops),
            "num-players" => Ok(RegionSort::NumPlayers),
            "name" => Ok(RegionSort::Name),
            other => Err(UnknownVariant::new("region sort", other)),
        }
    }
}

/// Sort orders for the players page; query-string and wire spellings match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerSort {
    #[default]
    NumChestShops,
    NumRegions,
    Name,
}

impl PlayerSort {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerSort::NumChestShops => "num-chest-shops",
            PlayerSort::NumRegions => "num-regions",
            PlayerSort::Name => "name",
        }
    }

    pub fn sort_by(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for PlayerSort {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "num-chest-shops" => Ok(PlayerSort::NumChestShops),
            "num-regions" => Ok(PlayerSort::NumRegions),
            "name" => Ok(PlayerSort::Name),
            other => Err(UnknownVariant::new("player sort", other)),
        }
    }
}

/// Tabs on the region detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionTab {
    #[default]
    Mayors,
    ItemsSold,
    ItemsPurchased,
}

impl RegionTab {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionTab::Mayors => "mayors",
            RegionTab::ItemsSold => "items-sold",
            RegionTab::ItemsPurchased => "items-purchased",
        }
    }

    /// Trade type behind the chest-shop tabs; `None` for the mayors tab.
    pub fn trade_type(self) -> Option<TradeType> {
        match self {
            RegionTab::Mayors => None,
            RegionTab::ItemsSold => Some(TradeType::Buy),
            RegionTab::ItemsPurchased => Some(TradeType::Sell),
        }
    }
}

impl FromStr for RegionTab {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mayors" => Ok(RegionTab::Mayors),
            "items-sold" => Ok(RegionTab::ItemsSold),
            "items-purchased" => Ok(RegionTab::ItemsPurchased),
            other => Err(UnknownVariant::new("region tab", other)),
        }
    }
}

/// Tabs on the player detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerTab {
    #[default]
    Regions,
    ItemsSold,
    ItemsPurchased,
}

impl PlayerTab {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerTab::Regions => "regions",
            PlayerTab::ItemsSold => "items-sold",
            PlayerTab::ItemsPurchased => "items-purchased",
        }
    }

    /// Trade type behind the chest-shop tabs; `None` for the regions tab.
    pub fn trade_type(self) -> Option<TradeType> {
        match self {
            PlayerTab::Regions => None,
            PlayerTab::ItemsSold => Some(TradeType::Buy),
            PlayerTab::ItemsPurchased => Some(TradeType::Sell),
        }
    }
}

impl FromStr for PlayerTab {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "regions" => Ok(PlayerTab::Regions),
            "items-sold" => Ok(PlayerTab::ItemsSold),
            "items-purchased" => Ok(PlayerTab::ItemsPurchased),
            other => Err(UnknownVariant::new("player tab", other)),
        }
    }
}
