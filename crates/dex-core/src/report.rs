//! Summary of one cleaning run.

use serde::Serialize;

use crate::collection::Collection;

/// What cleaning did to a single collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionReport {
  pub collection:          Collection,
  /// Rows whose stored label differed from its canonical form.
  pub relabeled:           usize,
  /// Rows deleted because a text attribute held a junk value.
  pub purged:              usize,
  /// Non-survivor duplicates deleted.
  pub merged:              usize,
  /// Referencing rows rewritten from a non-survivor to its survivor.
  pub references_remapped: usize,
  /// Referencing rows nulled or deleted because their target was purged.
  pub references_detached: usize,
}

impl CollectionReport {
  pub fn new(collection: Collection) -> Self {
    Self {
      collection,
      relabeled: 0,
      purged: 0,
      merged: 0,
      references_remapped: 0,
      references_detached: 0,
    }
  }

  pub fn is_noop(&self) -> bool {
    self.relabeled == 0
      && self.purged == 0
      && self.merged == 0
      && self.references_remapped == 0
      && self.references_detached == 0
  }
}

/// What a whole cleaning run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
  pub collections:      Vec<CollectionReport>,
  /// Ownership links that became exact duplicates after remapping.
  pub links_collapsed:  usize,
  /// References that pointed at nothing before the run started.
  pub orphans_detached: usize,
}

impl CleanReport {
  /// True when the dataset was already clean.
  pub fn is_noop(&self) -> bool {
    self.links_collapsed == 0
      && self.orphans_detached == 0
      && self.collections.iter().all(CollectionReport::is_noop)
  }

  pub fn for_collection(&self, collection: Collection) -> Option<&CollectionReport> {
    self.collections.iter().find(|c| c.collection == collection)
  }
}
