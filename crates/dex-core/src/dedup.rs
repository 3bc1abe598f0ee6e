//! Duplicate grouping and survivor selection.
//!
//! Planning is pure: given the `(id, label)` rows of one collection it decides
//! which rows collapse into which. Backends carry the plan out (reference
//! rewrites, deletes) inside their own transaction.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::normalize::fold;

/// One row of an entity collection, as far as cleaning is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
  pub id:    i64,
  pub label: Option<String>,
}

impl LabelRow {
  pub fn new(id: i64, label: Option<&str>) -> Self {
    Self { id, label: label.map(str::to_owned) }
  }
}

/// A set of rows sharing one folded label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
  /// The folded label shared by every member.
  pub key:        String,
  /// Lowest identity in the group; the row that is kept.
  pub survivor:   i64,
  /// Every other identity, ascending. Never empty.
  pub duplicates: Vec<i64>,
}

/// Group `rows` by folded label and pick the lowest identity of each group as
/// its survivor.
///
/// Rows with an absent label never group. Only groups with more than one
/// member are returned, ordered by survivor so callers apply them in a
/// stable order.
pub fn plan(rows: &[LabelRow]) -> Vec<DuplicateGroup> {
  let mut by_key: BTreeMap<String, Vec<i64>> = BTreeMap::new();
  for row in rows {
    if let Some(label) = &row.label {
      by_key.entry(fold(label)).or_default().push(row.id);
    }
  }

  let mut groups: Vec<DuplicateGroup> = by_key
    .into_iter()
    .filter(|(_, ids)| ids.len() > 1)
    .map(|(key, mut ids)| {
      ids.sort_unstable();
      ids.dedup();
      let survivor = ids.remove(0);
      DuplicateGroup { key, survivor, duplicates: ids }
    })
    .filter(|g| !g.duplicates.is_empty())
    .collect();

  groups.sort_by_key(|g| g.survivor);
  groups
}
