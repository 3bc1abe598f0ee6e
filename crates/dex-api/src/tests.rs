//! Router tests against an in-memory store and a scripted catalog.

use std::sync::{
  Arc,
  atomic::{AtomicUsize, Ordering},
};

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use dex_core::catalog::{Catalog, CatalogCreature, CatalogError};
use dex_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{AppState, api_router};

/// Answers from a fixed script and counts how often it was asked.
#[derive(Default)]
struct ScriptedCatalog {
  calls: AtomicUsize,
}

impl Catalog for ScriptedCatalog {
  async fn fetch_creature(&self, name: &str) -> Result<CatalogCreature, CatalogError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    match name {
      "raichu" => Ok(CatalogCreature {
        id:        26,
        name:      "raichu".into(),
        abilities: vec!["static".into(), "lightning-rod".into()],
        types:     vec!["electric".into()],
      }),
      "slowpoke" => Err(CatalogError::Unavailable("timed out".into())),
      "missingno" => Err(CatalogError::Status(500)),
      "glitch" => Err(CatalogError::Decode("expected value".into())),
      other => Err(CatalogError::NotFound(other.to_owned())),
    }
  }
}

const SEED: &str = "
  INSERT INTO types (id, name) VALUES (1, 'Fire'), (2, 'Electric');
  INSERT INTO abilities (id, name) VALUES (1, 'Static'), (2, 'Blaze'), (3, 'Levitate');
  INSERT INTO trainers (id, name) VALUES (1, 'Ash'), (2, 'Misty');
  INSERT INTO pokemon (id, name, type1_id, type2_id) VALUES
    (1, 'Pikachu', 2, NULL),
    (2, 'Charmander', 1, NULL);
  INSERT INTO trainer_pokemon_abilities (pokemon_id, ability_id, trainer_id) VALUES
    (1, 1, 1), (2, 2, 1), (2, 2, 2);
";

struct Harness {
  app:     Router,
  catalog: Arc<ScriptedCatalog>,
}

async fn harness(seed: &str) -> Harness {
  let store = SqliteStore::open_in_memory().await.unwrap();
  store.seed(seed).await.unwrap();
  let catalog = Arc::new(ScriptedCatalog::default());
  let app = api_router(AppState {
    store:   Arc::new(store),
    catalog: Arc::clone(&catalog),
  });
  Harness { app, catalog }
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
  let req = Request::builder()
    .method(method)
    .uri(uri)
    .body(Body::empty())
    .unwrap();
  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) { send(app, "GET", uri).await }

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) { send(app, "POST", uri).await }

// ── Root ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_reports_ready() {
  let h = harness("").await;
  let (status, body) = get(&h.app, "/").await;
  assert_eq!(status, StatusCode::OK);
  let message = body["message"].as_str().unwrap();
  assert!(message.starts_with("Status: Ready. The time is "), "{message}");
}

// ── Lookups ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn creatures_by_ability() {
  let h = harness(SEED).await;
  let (status, body) = get(&h.app, "/pokemon/ability/static").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!(["Pikachu"]));
}

#[tokio::test]
async fn known_ability_without_creatures_is_empty_list() {
  let h = harness(SEED).await;
  let (status, body) = get(&h.app, "/pokemon/ability/Levitate").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_ability_is_404() {
  let h = harness(SEED).await;
  let (status, body) = get(&h.app, "/pokemon/ability/Swift%20Swim").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Ability 'Swift Swim' not found.");
}

#[tokio::test]
async fn blank_name_is_400() {
  let h = harness(SEED).await;
  for uri in [
    "/pokemon/ability/%20",
    "/pokemon/type/%20%20",
    "/trainers/pokemon/%09",
    "/abilities/pokemon/%20",
  ] {
    let (status, _) = get(&h.app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
  }
  let (status, _) = post(&h.app, "/pokemon/create/%20").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn type_lookup_ignores_case() {
  let h = harness(SEED).await;
  let (_, lower) = get(&h.app, "/pokemon/type/fire").await;
  let (_, upper) = get(&h.app, "/pokemon/type/FIRE").await;
  assert_eq!(lower, json!(["Charmander"]));
  assert_eq!(lower, upper);
}

#[tokio::test]
async fn trainers_by_creature_are_distinct_and_sorted() {
  let h = harness(SEED).await;
  let (status, body) = get(&h.app, "/trainers/pokemon/charmander").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!(["Ash", "Misty"]));
}

#[tokio::test]
async fn abilities_by_creature() {
  let h = harness(SEED).await;
  let (status, body) = get(&h.app, "/abilities/pokemon/Charmander").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!(["Blaze"]));

  let (status, body) = get(&h.app, "/abilities/pokemon/Mew").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Pokemon 'Mew' not found.");
}

// ── Ingestion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_ingests_from_catalog() {
  let h = harness(SEED).await;

  let (status, body) = post(&h.app, "/pokemon/create/Raichu").await;
  assert_eq!(status, StatusCode::CREATED);
  let trainer = body["pokemon"]["trainer"].as_str().unwrap();
  assert!(["Ash", "Misty"].contains(&trainer), "{trainer}");
  assert_eq!(
    body["message"],
    format!("Successfully created Pokemon Raichu who has been trained by {trainer}")
  );

  let (_, abilities) = get(&h.app, "/abilities/pokemon/raichu").await;
  assert_eq!(abilities, json!(["Lightning-rod", "Static"]));
  let (_, electric) = get(&h.app, "/pokemon/type/electric").await;
  assert_eq!(electric, json!(["Pikachu", "Raichu"]));
  let (_, trainers) = get(&h.app, "/trainers/pokemon/Raichu").await;
  assert_eq!(trainers, json!([trainer]));
}

#[tokio::test]
async fn second_create_conflicts_without_calling_catalog() {
  let h = harness(SEED).await;

  let (first, _) = post(&h.app, "/pokemon/create/raichu").await;
  let (second, body) = post(&h.app, "/pokemon/create/RAICHU").await;

  assert_eq!(first, StatusCode::CREATED);
  assert_eq!(second, StatusCode::CONFLICT);
  assert_eq!(body["error"], "Pokemon 'RAICHU' already exists in db.");
  assert_eq!(h.catalog.calls.load(Ordering::SeqCst), 1);

  let (_, abilities) = get(&h.app, "/abilities/pokemon/raichu").await;
  assert_eq!(abilities, json!(["Lightning-rod", "Static"]));
}

#[tokio::test]
async fn create_existing_creature_conflicts() {
  let h = harness(SEED).await;
  let (status, _) = post(&h.app, "/pokemon/create/pikachu").await;
  assert_eq!(status, StatusCode::CONFLICT);
  assert_eq!(h.catalog.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_unknown_creature_is_404() {
  let h = harness(SEED).await;
  let (status, body) = post(&h.app, "/pokemon/create/Agumon").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "Pokemon 'agumon' not identified");
}

#[tokio::test]
async fn catalog_failures_map_to_gateway_statuses() {
  let h = harness(SEED).await;
  let (status, _) = post(&h.app, "/pokemon/create/slowpoke").await;
  assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
  let (status, _) = post(&h.app, "/pokemon/create/missingno").await;
  assert_eq!(status, StatusCode::BAD_GATEWAY);
  let (status, _) = post(&h.app, "/pokemon/create/glitch").await;
  assert_eq!(status, StatusCode::BAD_GATEWAY);

  let (status, _) = get(&h.app, "/abilities/pokemon/slowpoke").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_without_trainers_is_422() {
  let h = harness("").await;
  let (status, _) = post(&h.app, "/pokemon/create/raichu").await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

  let (status, _) = get(&h.app, "/abilities/pokemon/raichu").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Maintenance ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn clean_endpoint_returns_report() {
  let h = harness(
    "INSERT INTO pokemon (id, name) VALUES (1, 'pikuchu'), (2, 'Pikachu');
     INSERT INTO abilities (id, name) VALUES (1, '???');",
  )
  .await;

  let (status, report) = post(&h.app, "/maintenance/clean").await;
  assert_eq!(status, StatusCode::OK);
  let creature = &report["collections"][0];
  assert_eq!(creature["collection"], "creature");
  assert_eq!(creature["relabeled"], 1);
  assert_eq!(creature["merged"], 1);
  assert_eq!(report["collections"][2]["purged"], 1);

  let (status, body) = get(&h.app, "/abilities/pokemon/pikachu").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([]));

  let (_, again) = post(&h.app, "/maintenance/clean").await;
  assert_eq!(again["collections"][0]["merged"], 0);
}
