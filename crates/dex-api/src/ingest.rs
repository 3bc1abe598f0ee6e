//! `POST /pokemon/create/{name}`: pull a creature in from the catalog.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use dex_core::{
  catalog::Catalog,
  error::require_name,
  ingest::{IngestOutcome, IngestedCreature, NewCreature},
  store::DexStore,
};
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Created {
  pub message: String,
  pub pokemon: IngestedCreature,
}

/// Ingest a creature that is not yet in the store.
///
/// The existence check up front only spares a catalog round trip; the store
/// re-checks inside its write transaction.
pub async fn create<S, C>(
  State(state): State<AppState<S, C>>,
  Path(raw): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DexStore,
  C: Catalog,
{
  let name = require_name(&raw)?;
  let exists = || ApiError::Conflict(format!("Pokemon '{name}' already exists in db."));

  if state
    .store
    .creature_exists(name)
    .await
    .map_err(ApiError::store)?
  {
    return Err(exists());
  }

  let record = state.catalog.fetch_creature(&name.to_lowercase()).await?;
  let creature = NewCreature::from_catalog(&record);
  if creature.label.is_empty() {
    return Err(ApiError::Upstream(format!(
      "catalog returned a nameless record for '{name}'"
    )));
  }

  match state.store.ingest(creature).await.map_err(ApiError::store)? {
    IngestOutcome::Created(pokemon) => {
      let message = format!(
        "Successfully created Pokemon {} who has been trained by {}",
        pokemon.name, pokemon.trainer
      );
      Ok((StatusCode::CREATED, Json(Created { message, pokemon })))
    }
    IngestOutcome::AlreadyExists => Err(exists()),
    IngestOutcome::NoTrainers => Err(ApiError::Unprocessable(
      "no trainers in the store to attribute the creature to".to_owned(),
    )),
  }
}
