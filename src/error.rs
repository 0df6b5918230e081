//! Error types for bumpbot

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while publishing a merge request
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failure
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the GitLab API
    #[error("gitlab api error: {0}")]
    Api(String),

    /// Authentication failure
    #[error("authentication error: {0}")]
    Auth(String),

    /// Unreadable or invalid update plan
    #[error("invalid update plan: {0}")]
    Plan(String),
}
