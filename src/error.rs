//! Frontend Errors

use thiserror::Error;

/// Failure to retrieve a feed manifest. Shown to the reader as a fetch failure.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("browser window unavailable")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Malformed mount point in the page markup
#[derive(Debug, Error)]
pub enum MountError {
    #[error("unknown view {0:?}")]
    UnknownView(String),
    #[error("missing or unknown data-feed on {0} view")]
    MissingFeed(&'static str),
    #[error("missing data-src on markdown view")]
    MissingSource,
}

pub type FeedResult<T> = Result<T, FeedError>;
