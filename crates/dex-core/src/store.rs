//! The `DexStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `dex-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  ingest::{IngestOutcome, NewCreature},
  report::CleanReport,
};

/// Abstraction over a creature dataset backend.
///
/// Lookups match names trimmed and case-insensitively. They return `None`
/// when the named record does not exist and `Some(vec![])` when it exists
/// but nothing is related to it. Returned names are distinct and sorted.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DexStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Maintenance ───────────────────────────────────────────────────────

  /// Normalize, purge, and deduplicate every collection in one transaction.
  ///
  /// Either the whole run commits or nothing does. Running it on an already
  /// clean dataset changes nothing and returns a no-op report.
  fn clean(
    &self,
  ) -> impl Future<Output = Result<CleanReport, Self::Error>> + Send + '_;

  // ── Lookups ───────────────────────────────────────────────────────────

  /// Names of creatures that have `ability` through any ownership link.
  fn creatures_by_ability<'a>(
    &'a self,
    ability: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<String>>, Self::Error>> + Send + 'a;

  /// Names of creatures with `type_name` in either type slot.
  fn creatures_by_type<'a>(
    &'a self,
    type_name: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<String>>, Self::Error>> + Send + 'a;

  /// Names of trainers owning `creature`.
  fn trainers_by_creature<'a>(
    &'a self,
    creature: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<String>>, Self::Error>> + Send + 'a;

  /// Names of abilities `creature` has through any ownership link.
  fn abilities_by_creature<'a>(
    &'a self,
    creature: &'a str,
  ) -> impl Future<Output = Result<Option<Vec<String>>, Self::Error>> + Send + 'a;

  // ── Ingestion ─────────────────────────────────────────────────────────

  /// Whether a creature labelled `name` exists.
  fn creature_exists<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Write `creature`, its abilities, types, and ownership links in one
  /// transaction.
  ///
  /// Existence is re-checked inside the transaction; losing a race to a
  /// concurrent ingestion yields [`IngestOutcome::AlreadyExists`], not an
  /// error.
  fn ingest(
    &self,
    creature: NewCreature,
  ) -> impl Future<Output = Result<IngestOutcome, Self::Error>> + Send + '_;
}
