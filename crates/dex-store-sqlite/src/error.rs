//! Error type for `dex-store-sqlite`.

use dex_core::schema::SchemaProblem;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] dex_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("sqlite error: {0}")]
  Sqlite(#[from] rusqlite::Error),

  /// The store's tables do not match the collection descriptors.
  #[error("schema mismatch: {}", join(.0))]
  Schema(Vec<SchemaProblem>),

  /// Cleaning would have left references pointing at missing rows.
  #[error("integrity check failed: {0} dangling reference(s), first in {1}")]
  Integrity(usize, String),
}

fn join(problems: &[SchemaProblem]) -> String {
  problems
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
