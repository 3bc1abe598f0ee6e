//! The cleaning orchestrator.
//!
//! One run is one IMMEDIATE transaction over the whole store:
//!
//! 1. drop the unique label guards so relabeling may pass through collisions;
//! 2. detach references that already point at nothing;
//! 3. for each collection in cleaning order: relabel, purge junk, merge
//!    duplicates;
//! 4. collapse ownership links that became identical;
//! 5. run `PRAGMA foreign_key_check`;
//! 6. re-install the label guards and commit.
//!
//! Any error drops the transaction, which rolls everything back.

mod dedup;
mod purge;

use dex_core::{
  collection::{Collection, Edge},
  dedup::LabelRow,
  report::{CleanReport, CollectionReport},
};
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
  Error, Result,
  schema::{DROP_LABEL_GUARDS, LABEL_GUARDS},
  sql,
};

pub fn run(conn: &mut Connection) -> Result<CleanReport> {
  let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
  tx.execute_batch(DROP_LABEL_GUARDS)?;

  let mut report = CleanReport {
    orphans_detached: detach_orphans(&tx)?,
    ..CleanReport::default()
  };

  for collection in Collection::cleaning_order() {
    let summary = clean_collection(&tx, collection)?;
    tracing::debug!(?summary, "cleaned {collection}");
    report.collections.push(summary);
  }

  report.links_collapsed = tx.execute(sql::COLLAPSE_LINKS, [])?;

  check_foreign_keys(&tx)?;
  tx.execute_batch(LABEL_GUARDS)?;
  tx.commit()?;
  Ok(report)
}

fn clean_collection(tx: &Transaction<'_>, collection: Collection) -> Result<CollectionReport> {
  let mut report = CollectionReport::new(collection);
  let rows = load_rows(tx, collection)?;
  let rows = dedup::relabel(tx, collection, rows, &mut report)?;
  let rows = purge::purge(tx, collection, rows, &mut report)?;
  dedup::merge(tx, collection, &rows, &mut report)?;
  Ok(report)
}

fn load_rows(tx: &Transaction<'_>, collection: Collection) -> Result<Vec<LabelRow>> {
  let mut stmt = tx.prepare_cached(sql::select_labels(collection))?;
  let rows = stmt
    .query_map([], |row| Ok(LabelRow { id: row.get(0)?, label: row.get(1)? }))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

fn detach_orphans(tx: &Transaction<'_>) -> Result<usize> {
  let mut detached = 0;
  for edge in Edge::all() {
    detached += tx.execute(sql::detach_orphans(edge, edge.detach_policy()), [])?;
  }
  Ok(detached)
}

fn check_foreign_keys(tx: &Transaction<'_>) -> Result<()> {
  let mut stmt = tx.prepare(sql::FOREIGN_KEY_CHECK)?;
  let violations: Vec<String> = stmt
    .query_map([], |row| row.get(0))?
    .collect::<rusqlite::Result<_>>()?;

  match violations.first() {
    None => Ok(()),
    Some(table) => Err(Error::Integrity(violations.len(), table.clone())),
  }
}
