//! Async catalog client over `reqwest`.

use std::time::Duration;

use dex_core::catalog::{Catalog, CatalogCreature, CatalogError};
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches creatures from `GET {base_url}/{lowercase name}`.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
  client:   Client,
  base_url: Url,
}

impl PokeApiClient {
  /// `timeout` bounds the whole request, body included.
  pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let base_url = Url::parse(base_url).map_err(|e| Error::BaseUrl {
      url:    base_url.to_owned(),
      reason: e.to_string(),
    })?;
    if base_url.cannot_be_a_base() {
      return Err(Error::BaseUrl {
        url:    base_url.into(),
        reason: "URL cannot carry a path".to_owned(),
      });
    }

    let client = Client::builder().timeout(timeout).build()?;
    Ok(Self { client, base_url })
  }

  /// The creature's name becomes a single, percent-encoded path segment.
  fn creature_url(&self, name: &str) -> Url {
    let mut url = self.base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().push(&name.trim().to_lowercase());
    }
    url
  }
}

impl Catalog for PokeApiClient {
  async fn fetch_creature(&self, name: &str) -> Result<CatalogCreature, CatalogError> {
    let url = self.creature_url(name);
    tracing::debug!(%url, "fetching creature from catalog");

    let resp = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

    match resp.status() {
      status if status.is_success() => {}
      StatusCode::NOT_FOUND => return Err(CatalogError::NotFound(name.to_owned())),
      status => return Err(CatalogError::Status(status.as_u16())),
    }

    let payload: Payload = resp.json().await.map_err(|e| {
      if e.is_decode() {
        CatalogError::Decode(e.to_string())
      } else {
        CatalogError::Unavailable(e.to_string())
      }
    })?;
    Ok(payload.into())
  }
}

// ─── Wire format ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Payload {
  id:        i64,
  name:      String,
  #[serde(default)]
  abilities: Vec<AbilitySlot>,
  #[serde(default)]
  types:     Vec<TypeSlot>,
}

#[derive(Deserialize)]
struct AbilitySlot {
  ability: Named,
}

#[derive(Deserialize)]
struct TypeSlot {
  #[serde(default)]
  slot:  u32,
  #[serde(rename = "type")]
  kind:  Named,
}

#[derive(Deserialize)]
struct Named {
  name: String,
}

impl From<Payload> for CatalogCreature {
  fn from(mut p: Payload) -> Self {
    // Primary type first; a stable sort keeps array order for missing slots.
    p.types.sort_by_key(|t| t.slot);
    Self {
      id:        p.id,
      name:      p.name,
      abilities: p.abilities.into_iter().map(|a| a.ability.name).collect(),
      types:     p.types.into_iter().map(|t| t.kind.name).collect(),
    }
  }
}
