//! `POST /maintenance/clean`: run the cleaning orchestrator on demand.

use axum::{Json, extract::State};
use dex_core::{catalog::Catalog, report::CleanReport, store::DexStore};

use crate::{AppState, error::ApiError};

/// Returns the run's report; a failed run has already been rolled back.
pub async fn clean<S, C>(
  State(state): State<AppState<S, C>>,
) -> Result<Json<CleanReport>, ApiError>
where
  S: DexStore,
  C: Catalog,
{
  let report = state.store.clean().await.map_err(ApiError::store)?;
  Ok(Json(report))
}
