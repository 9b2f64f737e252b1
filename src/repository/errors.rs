use thiserror::Error;

/// Failures at the remote-API boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested entity does not exist. Covers both of the API's
    /// not-found conventions: a 404 response (regions) and an empty 204
    /// response (players).
    #[error("entity not found")]
    NotFound,

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid base url")]
    InvalidBaseUrl,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(_: url::ParseError) -> Self {
        ApiError::InvalidBaseUrl
    }
}
