//! Relabeling and duplicate merging for one collection.

use dex_core::{
  collection::Collection,
  dedup::{self, LabelRow},
  normalize::normalize,
  report::CollectionReport,
  schema::CollectionSchema,
};
use rusqlite::{Transaction, params};

use crate::{Result, sql};

/// Rewrite every label that is not already canonical. Returns the rows with
/// their canonical labels.
pub fn relabel(
  tx: &Transaction<'_>,
  collection: Collection,
  rows: Vec<LabelRow>,
  report: &mut CollectionReport,
) -> Result<Vec<LabelRow>> {
  let mut stmt = tx.prepare_cached(sql::update_label(collection))?;
  let mut out = Vec::with_capacity(rows.len());

  for row in rows {
    let Some(raw) = row.label.as_deref() else {
      out.push(row);
      continue;
    };
    let canonical = normalize(raw);
    if canonical != raw {
      stmt.execute(params![canonical, row.id])?;
      report.relabeled += 1;
    }
    out.push(LabelRow { id: row.id, label: Some(canonical) });
  }

  Ok(out)
}

/// Collapse every group of rows sharing a folded label into its lowest id.
pub fn merge(
  tx: &Transaction<'_>,
  collection: Collection,
  rows: &[LabelRow],
  report: &mut CollectionReport,
) -> Result<()> {
  let edges: Vec<_> = CollectionSchema::of(collection).inbound_edges().collect();
  let mut delete = tx.prepare_cached(sql::delete_row(collection))?;

  for group in dedup::plan(rows) {
    for &duplicate in &group.duplicates {
      for &edge in &edges {
        report.references_remapped +=
          tx.execute(sql::remap(edge), params![group.survivor, duplicate])?;
      }
      delete.execute([duplicate])?;
      report.merged += 1;
    }
    tracing::debug!(
      %collection,
      key = %group.key,
      survivor = group.survivor,
      duplicates = ?group.duplicates,
      "merged duplicates"
    );
  }

  Ok(())
}
