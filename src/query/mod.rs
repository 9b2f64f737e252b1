//! Query-state handling for the list and detail pages.
//!
//! Every page keeps its complete filter/sort/page state in the URL query
//! string; nothing is held elsewhere, so the address bar is the single source
//! of truth and back/forward navigation reproduces a page exactly. The types
//! here are the typed face of that string: they decode leniently (missing
//! keys take documented defaults, malformed values fall back instead of
//! erroring) and encode losslessly.
//!
//! The one rule shared by all of them: changing any filter or sort resets the
//! page to 1, so a stale page number can never point past a shrunken result
//! set. Only the pagination controls move `page` on its own.

mod detail;
mod players;
mod regions;
mod shops;

pub use detail::{PlayerDetailQuery, RegionDetailQuery};
pub use players::PlayerQuery;
pub use regions::RegionQuery;
pub use shops::ShopQuery;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// State round-tripped through the URL query string.
pub trait QueryState: Serialize + DeserializeOwned + Default + Clone {
    /// Current 1-based page number.
    fn page(&self) -> u32;

    /// Moves to another page without touching any filter.
    fn set_page(&mut self, page: u32);

    /// Parses a query string, falling back to the page defaults when the
    /// string as a whole is unusable. Individual malformed values are
    /// handled field by field and never poison the rest of the state.
    fn decode(query: &str) -> Self {
        serde_html_form::from_str(query).unwrap_or_default()
    }

    /// Serializes the full state back into query-string form.
    fn encode(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

pub(crate) fn first_page() -> u32 {
    1
}

pub(crate) fn default_true() -> bool {
    true
}

/// Lenient page parser: anything that is not a positive integer becomes 1.
pub(crate) fn de_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.parse::<u32>().ok().filter(|page| *page >= 1).unwrap_or(1))
}

/// Lenient vocabulary parser: unrecognized values fall back to the default
/// variant instead of failing the whole query string.
pub(crate) fn de_vocab<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.parse().unwrap_or_default())
}

/// Boolean that is true unless the literal string `false` is present. An
/// absent key therefore reads as true; this asymmetry matches the existing
/// URL surface and has to stay.
pub(crate) fn de_bool_default_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value != "false")
}

/// Boolean that is false unless the literal string `true` is present.
pub(crate) fn de_bool_default_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value == "true")
}

/// Free-text filter: an empty value is the same as no value.
pub(crate) fn de_text_filter<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}
