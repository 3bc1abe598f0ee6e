//! Errors raised while constructing a catalog client.
//!
//! Failures of individual lookups are [`dex_core::catalog::CatalogError`]s.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid catalog base URL {url:?}: {reason}")]
  BaseUrl { url: String, reason: String },

  #[error("failed to build HTTP client: {0}")]
  Client(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
