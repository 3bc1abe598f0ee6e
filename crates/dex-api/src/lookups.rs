//! Read-only lookup handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/pokemon/ability/{name}` | Creatures with the ability |
//! | `GET`  | `/pokemon/type/{name}` | Creatures with the type in either slot |
//! | `GET`  | `/trainers/pokemon/{name}` | Trainers owning the creature |
//! | `GET`  | `/abilities/pokemon/{name}` | Abilities of the creature |
//!
//! A blank name is 400, an unknown one 404. A known name with nothing related
//! to it is `200 []`.

use axum::{
  Json,
  extract::{Path, State},
};
use dex_core::{catalog::Catalog, error::require_name, store::DexStore};

use crate::{AppState, error::ApiError};

type Names = Result<Json<Vec<String>>, ApiError>;

fn found(names: Option<Vec<String>>, missing: impl FnOnce() -> String) -> Names {
  names.map(Json).ok_or_else(|| ApiError::NotFound(missing()))
}

/// `GET /pokemon/ability/{name}`
pub async fn creatures_by_ability<S, C>(
  State(state): State<AppState<S, C>>,
  Path(raw): Path<String>,
) -> Names
where
  S: DexStore,
  C: Catalog,
{
  let name = require_name(&raw)?;
  let names = state
    .store
    .creatures_by_ability(name)
    .await
    .map_err(ApiError::store)?;
  found(names, || format!("Ability '{name}' not found."))
}

/// `GET /pokemon/type/{name}`
pub async fn creatures_by_type<S, C>(
  State(state): State<AppState<S, C>>,
  Path(raw): Path<String>,
) -> Names
where
  S: DexStore,
  C: Catalog,
{
  let name = require_name(&raw)?;
  let names = state
    .store
    .creatures_by_type(name)
    .await
    .map_err(ApiError::store)?;
  found(names, || format!("Type '{name}' not found."))
}

/// `GET /trainers/pokemon/{name}`
pub async fn trainers_by_creature<S, C>(
  State(state): State<AppState<S, C>>,
  Path(raw): Path<String>,
) -> Names
where
  S: DexStore,
  C: Catalog,
{
  let name = require_name(&raw)?;
  let names = state
    .store
    .trainers_by_creature(name)
    .await
    .map_err(ApiError::store)?;
  found(names, || format!("Pokemon '{name}' not found."))
}

/// `GET /abilities/pokemon/{name}`
pub async fn abilities_by_creature<S, C>(
  State(state): State<AppState<S, C>>,
  Path(raw): Path<String>,
) -> Names
where
  S: DexStore,
  C: Catalog,
{
  let name = require_name(&raw)?;
  let names = state
    .store
    .abilities_by_creature(name)
    .await
    .map_err(ApiError::store)?;
  found(names, || format!("Pokemon '{name}' not found."))
}
