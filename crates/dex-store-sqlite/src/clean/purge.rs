//! Junk-value purge for one collection.

use dex_core::{
  collection::Collection,
  dedup::LabelRow,
  junk::is_junk,
  report::CollectionReport,
  schema::CollectionSchema,
};
use rusqlite::Transaction;

use crate::{Result, sql};

/// Delete every row whose label is a junk value, releasing references to it
/// first. Returns the rows that remain.
///
/// Only the label is loaded: it is the one text attribute every collection
/// declares, and opening the store refuses tables with any other.
pub fn purge(
  tx: &Transaction<'_>,
  collection: Collection,
  rows: Vec<LabelRow>,
  report: &mut CollectionReport,
) -> Result<Vec<LabelRow>> {
  let schema = CollectionSchema::of(collection);
  debug_assert_eq!(schema.text_attributes, [schema.label]);

  let (junk, kept): (Vec<_>, Vec<_>) = rows
    .into_iter()
    .partition(|row| row.label.as_deref().is_some_and(is_junk));

  let mut delete = tx.prepare_cached(sql::delete_row(collection))?;
  for row in junk {
    for edge in schema.inbound_edges() {
      let policy = edge.detach_policy();
      let detached = tx.execute(sql::detach(edge, policy), [row.id])?;
      if detached > 0 {
        tracing::debug!(?edge, ?policy, detached, "released references");
      }
      report.references_detached += detached;
    }
    delete.execute([row.id])?;
    report.purged += 1;
    tracing::debug!(%collection, id = row.id, label = ?row.label, "purged junk row");
  }

  Ok(kept)
}
