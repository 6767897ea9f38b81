//! Infrastructure-side error types.
//!
//! Fetch-time failures always surface as the domain's closed
//! [`multisync_domain::FetchError`] taxonomy; `InfraError` covers the
//! setup paths around it (configuration loading, client construction)
//! that are not part of a fetch attempt.

use thiserror::Error;

/// Errors raised while assembling infrastructure, before any fetch runs.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpClient(err.to_string())
    }
}
