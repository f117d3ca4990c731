//! # Domain Errors
//!
//! Typed failures of the catalog lookups. The router turns these into a single
//! generic reply, so handlers can propagate them with `?`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("catalog request to `{endpoint}` failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status} for `{endpoint}`: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("could not decode catalog response from `{endpoint}`: {message}")]
    Decode { endpoint: String, message: String },
}

impl CatalogError {
    pub fn endpoint(&self) -> &str {
        match self {
            CatalogError::Transport { endpoint, .. }
            | CatalogError::Status { endpoint, .. }
            | CatalogError::Decode { endpoint, .. } => endpoint,
        }
    }
}
