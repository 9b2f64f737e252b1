//! Page-level orchestration on top of the repository traits.

use thiserror::Error;

use crate::repository::errors::ApiError;

pub mod players;
pub mod regions;
pub mod shops;

/// Failures surfaced to the page-routing boundary.
///
/// The two not-found variants are deliberately separate: a missing player
/// and a missing region route to different destinations, even though the
/// repository reports both as the same [`ApiError::NotFound`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("player not found")]
    PlayerNotFound,

    #[error("region not found")]
    RegionNotFound,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
