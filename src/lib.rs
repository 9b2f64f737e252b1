//! Core engine of a chest-shop marketplace catalog browser.
//!
//! The crate covers everything behind the rendered pages of the catalog:
//! typed URL query states ([`query`]), the contract with the remote
//! marketplace API ([`repository`]), request coordination with cancellation
//! ([`fetcher`]), search-suggestion ranking ([`search`]), and the page
//! orchestration functions ([`services`]). Rendering is someone else's job;
//! every public type here is plain data a view layer can consume.

pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod models;
pub mod pagination;
pub mod query;
pub mod repository;
pub mod search;
pub mod services;

/// Rows per page in the regular card layout.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Rows per page in the condensed table layout and on detail-page tabs.
pub const CONDENSED_PAGE_SIZE: u32 = 50;
