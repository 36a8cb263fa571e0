//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while talking to the portal backend.
///
/// Every variant is a transport-level failure; backend-reported rejections
/// are not errors and arrive as `BackendReply::Rejected`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("portal request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("portal returned a malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted while loading `PortalConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid portal API URL: {raw}")]
    InvalidApiUrl { raw: String },
    #[error("unknown backend contract `{raw}` (expected `current` or `legacy`)")]
    UnknownContract { raw: String },
    #[error("invalid request timeout: {raw}")]
    InvalidTimeout { raw: String },
}
