//! Shared error types for the services crate.

use thiserror::Error;

/// Failure to obtain the current user's course progress.
///
/// Every variant is presented to the user the same way: a logged-out
/// session and an unreachable API are indistinguishable from the outside.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressFetchError {
    #[error("progress request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("progress request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("progress response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("progress response has no user record")]
    MissingUser,
}
