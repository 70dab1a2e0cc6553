//! Error taxonomy for REST calls.
//!
//! Pages never branch on the variant; they render the `Display` text in a
//! toast. The split exists for logging and tests.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Failed { status: u16, message: String },
    /// The request never completed or its body could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// The body was read but did not match the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Browser APIs are unavailable (native builds and tests).
    #[error("not available outside the browser")]
    Unavailable,
}
