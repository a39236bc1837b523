//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;

/// Errors emitted by backend API calls.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("API base URL is not set")]
    NotConfigured,
    #[error("API base URL cannot be used for requests: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `LoginService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ProcessingTrigger`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProcessingError {
    #[error("select an exam before processing")]
    NoSelection,
    #[error("processing is already running")]
    Busy,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
