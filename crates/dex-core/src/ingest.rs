//! Input and outcome types for creature ingestion.

use serde::Serialize;

use crate::{catalog::CatalogCreature, normalize::catalog_label};

/// How many type slots a creature has.
pub const TYPE_SLOTS: usize = 2;

/// A creature ready to be written: every label already canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCreature {
  pub label:     String,
  /// Distinct ability labels, in catalog order.
  pub abilities: Vec<String>,
  /// At most [`TYPE_SLOTS`] distinct type labels, primary first.
  pub types:     Vec<String>,
}

impl NewCreature {
  /// Canonicalize a catalog record with the same routine the cleaning engine
  /// uses, so ingestion never writes a label that cleaning would rewrite.
  pub fn from_catalog(record: &CatalogCreature) -> Self {
    Self {
      label:     catalog_label(&record.name),
      abilities: distinct_labels(&record.abilities, usize::MAX),
      types:     distinct_labels(&record.types, TYPE_SLOTS),
    }
  }
}

fn distinct_labels(raw: &[String], limit: usize) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();
  for label in raw.iter().map(|r| catalog_label(r)) {
    if out.len() == limit {
      break;
    }
    if !label.is_empty() && !out.iter().any(|l| l.eq_ignore_ascii_case(&label)) {
      out.push(label);
    }
  }
  out
}

/// A creature that was written by ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestedCreature {
  pub id:        i64,
  pub name:      String,
  /// The randomly chosen trainer the abilities were attributed to.
  pub trainer:   String,
  pub abilities: Vec<String>,
  pub types:     Vec<String>,
}

/// Result of asking the store to ingest a creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
  Created(IngestedCreature),
  /// A creature with the same canonical label already exists; nothing written.
  AlreadyExists,
  /// There is no trainer to attribute abilities to; nothing written.
  NoTrainers,
}
