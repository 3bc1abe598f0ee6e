//! Runtime server configuration.

use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

/// Deserialised from `config.toml` layered under `DEX_*` environment
/// variables. Every field has a default, so both sources are optional.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  pub store_path:           PathBuf,
  pub catalog_base_url:     String,
  pub catalog_timeout_secs: u64,
  /// Run the cleaning orchestrator before accepting requests.
  pub clean_on_startup:     bool,
}

impl ServerConfig {
  pub fn catalog_timeout(&self) -> Duration {
    Duration::from_secs(self.catalog_timeout_secs)
  }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "127.0.0.1".to_owned(),
      port:                 8000,
      store_path:           PathBuf::from("pokemon.sqlite"),
      catalog_base_url:     dex_catalog::DEFAULT_BASE_URL.to_owned(),
      catalog_timeout_secs: dex_catalog::DEFAULT_TIMEOUT.as_secs(),
      clean_on_startup:     true,
    }
  }
}
