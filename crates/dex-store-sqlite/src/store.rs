//! [`SqliteStore`], the SQLite implementation of [`DexStore`].

use std::path::Path;

use dex_core::{
  collection::Collection,
  error::require_name,
  ingest::{IngestOutcome, NewCreature},
  report::CleanReport,
  store::DexStore,
};
use rusqlite::Connection;

use crate::{
  Result, clean, functions,
  ingest::{self, find_label},
  introspect::{self, Introspection},
  schema::SCHEMA,
  sql,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A creature dataset backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. All calls
/// are serialized onto the connection's thread, so a cleaning run has the
/// store to itself for its full duration.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, run schema initialisation, and check
  /// the tables against the collection descriptors.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        functions::register(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(introspect::verify(conn))
      })
      .await??;
    Ok(())
  }

  /// Run a batch of raw SQL against the store, e.g. to load seed rows.
  ///
  /// Seeding happens outside the cleaning engine; call [`DexStore::clean`]
  /// afterwards before serving.
  pub async fn seed(&self, batch: impl Into<String>) -> Result<()> {
    let batch = batch.into();
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&batch)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Report the identity, label, text attributes, and inbound foreign keys
  /// the live table for `collection` declares.
  pub async fn introspect(&self, collection: Collection) -> Result<Introspection> {
    self
      .conn
      .call(move |conn| Ok(introspect::introspect(conn, collection)))
      .await?
  }

  /// Shared shape of the four lookups: `None` if nothing in `target` is
  /// labelled `name`, otherwise the names `related` yields for it.
  async fn related(
    &self,
    target: Collection,
    related: &'static str,
    name: &str,
  ) -> Result<Option<Vec<String>>> {
    let name = require_name(name)?.to_owned();

    let names = self
      .conn
      .call(move |conn| Ok(related_names(conn, target, related, &name)?))
      .await?;
    Ok(names)
  }
}

fn related_names(
  conn: &Connection,
  target: Collection,
  related: &str,
  name: &str,
) -> rusqlite::Result<Option<Vec<String>>> {
  if find_label(conn, target, name)?.is_none() {
    return Ok(None);
  }
  let mut stmt = conn.prepare_cached(related)?;
  let names = stmt
    .query_map([name], |row| row.get(0))?
    .collect::<rusqlite::Result<Vec<String>>>()?;
  Ok(Some(names))
}

// ─── DexStore impl ───────────────────────────────────────────────────────────

impl DexStore for SqliteStore {
  type Error = crate::Error;

  // ── Maintenance ───────────────────────────────────────────────────────────

  async fn clean(&self) -> Result<CleanReport> {
    let outcome = self.conn.call(|conn| Ok(clean::run(conn))).await?;

    match &outcome {
      Ok(report) if report.is_noop() => {
        tracing::info!("cleaning run found nothing to change");
      }
      Ok(report) => {
        for c in &report.collections {
          tracing::info!(
            collection = %c.collection,
            relabeled = c.relabeled,
            purged = c.purged,
            merged = c.merged,
            remapped = c.references_remapped,
            detached = c.references_detached,
            "collection cleaned"
          );
        }
        tracing::info!(
          links_collapsed = report.links_collapsed,
          orphans_detached = report.orphans_detached,
          "cleaning run committed"
        );
      }
      Err(e) => tracing::error!(error = %e, "cleaning run rolled back"),
    }

    outcome
  }

  // ── Lookups ───────────────────────────────────────────────────────────────

  async fn creatures_by_ability(&self, ability: &str) -> Result<Option<Vec<String>>> {
    self
      .related(Collection::Ability, sql::CREATURES_BY_ABILITY, ability)
      .await
  }

  async fn creatures_by_type(&self, type_name: &str) -> Result<Option<Vec<String>>> {
    self
      .related(Collection::Type, sql::CREATURES_BY_TYPE, type_name)
      .await
  }

  async fn trainers_by_creature(&self, creature: &str) -> Result<Option<Vec<String>>> {
    self
      .related(Collection::Creature, sql::TRAINERS_BY_CREATURE, creature)
      .await
  }

  async fn abilities_by_creature(&self, creature: &str) -> Result<Option<Vec<String>>> {
    self
      .related(Collection::Creature, sql::ABILITIES_BY_CREATURE, creature)
      .await
  }

  // ── Ingestion ─────────────────────────────────────────────────────────────

  async fn creature_exists(&self, name: &str) -> Result<bool> {
    let name = require_name(name)?.to_owned();

    let found = self
      .conn
      .call(move |conn| Ok(find_label(conn, Collection::Creature, &name)?))
      .await?;
    Ok(found.is_some())
  }

  async fn ingest(&self, creature: NewCreature) -> Result<IngestOutcome> {
    let label = creature.label.clone();
    let outcome = self
      .conn
      .call(move |conn| Ok(ingest::ingest(conn, &creature)))
      .await??;

    match &outcome {
      IngestOutcome::Created(c) => {
        tracing::info!(id = c.id, name = %c.name, trainer = %c.trainer, "creature ingested");
      }
      IngestOutcome::AlreadyExists => {
        tracing::warn!(name = %label, "ingestion lost to an existing creature");
      }
      IngestOutcome::NoTrainers => {
        tracing::warn!(name = %label, "ingestion rejected: no trainers");
      }
    }
    Ok(outcome)
  }
}
