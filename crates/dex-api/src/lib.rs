//! JSON REST API over the creature dataset.
//!
//! Exposes an axum [`Router`] backed by any [`DexStore`] and [`Catalog`].
//! Tracing, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = dex_api::api_router(AppState { store, catalog })
//!   .layer(TraceLayer::new_for_http());
//! ```

pub mod error;
pub mod ingest;
pub mod lookups;
pub mod maintenance;
pub mod status;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use dex_core::{catalog::Catalog, store::DexStore};

pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, C> {
  pub store:   Arc<S>,
  pub catalog: Arc<C>,
}

// Not derived: the derive would demand `S: Clone` and `C: Clone`.
impl<S, C> Clone for AppState<S, C> {
  fn clone(&self) -> Self {
    Self {
      store:   Arc::clone(&self.store),
      catalog: Arc::clone(&self.catalog),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, C>(state: AppState<S, C>) -> Router<()>
where
  S: DexStore + 'static,
  C: Catalog + 'static,
{
  Router::new()
    .route("/", get(status::root))
    // Lookups
    .route("/pokemon/ability/{name}", get(lookups::creatures_by_ability::<S, C>))
    .route("/pokemon/type/{name}", get(lookups::creatures_by_type::<S, C>))
    .route("/trainers/pokemon/{name}", get(lookups::trainers_by_creature::<S, C>))
    .route("/abilities/pokemon/{name}", get(lookups::abilities_by_creature::<S, C>))
    // Ingestion
    .route("/pokemon/create/{name}", post(ingest::create::<S, C>))
    // Maintenance
    .route("/maintenance/clean", post(maintenance::clean::<S, C>))
    .with_state(state)
}

#[cfg(test)]
mod tests;
