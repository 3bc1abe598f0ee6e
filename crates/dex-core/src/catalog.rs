//! The external creature catalog, seen from the inside.
//!
//! Implemented by `dex-catalog` over HTTP; the API layer depends only on the
//! [`Catalog`] trait so tests can substitute an in-memory catalog.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A creature as the catalog describes it, names still in catalog spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCreature {
  /// The catalog's own identifier; informational only.
  pub id:        i64,
  pub name:      String,
  pub abilities: Vec<String>,
  /// Order matters: the first entry is the primary type.
  pub types:     Vec<String>,
}

/// Why a catalog lookup failed.
///
/// [`CatalogError::Unavailable`] means "try again later"; every other variant
/// means the catalog answered and rejected or garbled the request.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("catalog unreachable: {0}")]
  Unavailable(String),

  #[error("catalog has no creature named {0:?}")]
  NotFound(String),

  #[error("catalog returned status {0}")]
  Status(u16),

  #[error("catalog response could not be decoded: {0}")]
  Decode(String),
}

impl CatalogError {
  pub fn is_unavailable(&self) -> bool { matches!(self, Self::Unavailable(_)) }
}

/// Read-only lookup of creatures by lowercase name.
pub trait Catalog: Send + Sync {
  fn fetch_creature<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<CatalogCreature, CatalogError>> + Send + 'a;
}
