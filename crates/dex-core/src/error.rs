//! Error types for `dex-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("name must not be blank")]
  BlankName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Trim `raw` and reject it if nothing is left.
///
/// Every lookup and ingestion entry point validates its input with this before
/// touching the store.
pub fn require_name(raw: &str) -> Result<&str> {
  let name = raw.trim();
  if name.is_empty() {
    return Err(Error::BlankName);
  }
  Ok(name)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn require_name_trims() {
    assert_eq!(require_name("  Pikachu ").unwrap(), "Pikachu");
  }

  #[test]
  fn require_name_rejects_blank() {
    assert!(matches!(require_name(""), Err(Error::BlankName)));
    assert!(matches!(require_name(" \t "), Err(Error::BlankName)));
  }
}
