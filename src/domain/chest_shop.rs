use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerRef;
use crate::domain::region::RegionRef;

/// Block coordinates of a chest shop sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// A single chest shop listing as returned by the `chest-shops` endpoints.
///
/// Shops carry both buy and sell prices; which side is relevant depends on
/// the trade type the page was queried with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChestShop {
    pub material: String,
    pub quantity: i64,
    pub quantity_available: i64,
    pub buy_price: f64,
    pub buy_price_each: f64,
    pub sell_price: f64,
    pub sell_price_each: f64,
    pub buy_sign: bool,
    pub sell_sign: bool,
    /// A full chest cannot accept more stock, which makes sell offers
    /// unavailable.
    pub full: bool,
    pub server: String,
    pub location: Location,
    pub owner: PlayerRef,
    pub town: RegionRef,
}

impl ChestShop {
    /// Whether the shop can currently serve the given trade side.
    pub fn available(&self, sell: bool) -> bool {
        if sell { !self.full } else { self.quantity_available > 0 }
    }
}
