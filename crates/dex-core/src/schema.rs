//! Per-collection schema descriptors and the checks that hold a live store to
//! them.
//!
//! The cleaning engine never guesses which column is the identity or the
//! label: it reads them from [`CollectionSchema::of`]. The name heuristics in
//! this module exist to *verify* a store against the descriptors when it is
//! opened, so a table that drifted from the expected shape fails loudly
//! instead of being skipped.

use thiserror::Error;

use crate::collection::{Collection, Edge};

// ─── Descriptors ─────────────────────────────────────────────────────────────

/// The static shape of one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
  pub collection:      Collection,
  pub identity:        &'static str,
  pub label:           &'static str,
  /// Attributes checked against the junk list. Always includes `label`.
  pub text_attributes: &'static [&'static str],
}

impl CollectionSchema {
  pub fn of(collection: Collection) -> Self {
    Self {
      collection,
      identity: "id",
      label: "name",
      text_attributes: &["name"],
    }
  }

  /// Edges pointing at this collection; their references are remapped when a
  /// duplicate collapses and detached when a junk row is purged.
  pub fn inbound_edges(&self) -> impl Iterator<Item = Edge> {
    Edge::inbound(self.collection)
  }
}

// ─── Observed shape ──────────────────────────────────────────────────────────

/// A column as reported by the store (`PRAGMA table_info`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  pub name:          String,
  /// Declared SQL type; may be empty for untyped columns.
  pub declared_type: String,
}

impl Attribute {
  pub fn new(name: &str, declared_type: &str) -> Self {
    Self { name: name.to_owned(), declared_type: declared_type.to_owned() }
  }

  fn is_textual(&self) -> bool {
    let ty = self.declared_type.to_uppercase();
    ty.contains("CHAR") || ty.contains("TEXT") || ty.contains("CLOB")
  }
}

/// A declared foreign key (`PRAGMA foreign_key_list`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
  pub from_table:  String,
  pub from_column: String,
  pub to_table:    String,
  /// `None` when the key references the target's primary key implicitly.
  pub to_column:   Option<String>,
}

// ─── Heuristics ──────────────────────────────────────────────────────────────

fn identity_candidates(collection: Collection) -> [String; 3] {
  [
    "id".to_owned(),
    format!("{}_id", collection.singular()),
    format!("{}_id", collection.table()),
  ]
}

fn label_candidates(collection: Collection) -> [String; 6] {
  [
    "name".to_owned(),
    format!("{}_name", collection.singular()),
    format!("{}_name", collection.table()),
    "type".to_owned(),
    "ability".to_owned(),
    "trainer".to_owned(),
  ]
}

/// First attribute, in priority order, that looks like the identity; falls
/// back to the first declared attribute.
pub fn identity_attribute(
  collection: Collection,
  attributes: &[Attribute],
) -> Option<&str> {
  identity_candidates(collection)
    .iter()
    .find_map(|c| find_attribute(attributes, c))
    .or_else(|| attributes.first().map(|a| a.name.as_str()))
}

/// First attribute, in priority order, that looks like a textual label.
pub fn label_attribute(
  collection: Collection,
  attributes: &[Attribute],
) -> Option<&str> {
  label_candidates(collection)
    .iter()
    .find_map(|c| find_attribute(attributes, c))
}

/// Attributes that are declared textual or carry a label-like name.
pub fn text_attributes(
  collection: Collection,
  attributes: &[Attribute],
) -> Vec<&str> {
  let labels = label_candidates(collection);
  attributes
    .iter()
    .filter(|a| {
      a.is_textual() || labels.iter().any(|l| l.eq_ignore_ascii_case(&a.name))
    })
    .map(|a| a.name.as_str())
    .collect()
}

/// Declared foreign keys that point at `collection`, as
/// (referencing table, referencing column, referenced column) triples.
pub fn inbound_keys<'a>(
  collection: Collection,
  keys: &'a [ForeignKey],
) -> Vec<(&'a str, &'a str, Option<&'a str>)> {
  keys
    .iter()
    .filter(|k| k.to_table.eq_ignore_ascii_case(collection.table()))
    .map(|k| {
      (k.from_table.as_str(), k.from_column.as_str(), k.to_column.as_deref())
    })
    .collect()
}

fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
  attributes
    .iter()
    .find(|a| a.name.eq_ignore_ascii_case(name))
    .map(|a| a.name.as_str())
}

// ─── Verification ────────────────────────────────────────────────────────────

/// A way in which a live table disagrees with its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaProblem {
  #[error("{0}: table is missing")]
  MissingTable(Collection),

  #[error("{collection}: identity column is {found:?}, expected {expected:?}")]
  Identity {
    collection: Collection,
    expected:   &'static str,
    found:      Option<String>,
  },

  #[error("{0}: no label column found; the collection cannot be cleaned")]
  MissingLabel(Collection),

  #[error("{collection}: label column is {found:?}, expected {expected:?}")]
  Label {
    collection: Collection,
    expected:   &'static str,
    found:      String,
  },

  #[error("{collection}: text column {column:?} is not covered by the junk purge")]
  UncoveredText { collection: Collection, column: String },

  #[error("{collection}: foreign key {table}.{column} is not declared in the store")]
  MissingEdge {
    collection: Collection,
    table:      &'static str,
    column:     &'static str,
  },

  #[error("{collection}: foreign key {table}.{column} would not be remapped")]
  UnknownEdge {
    collection: Collection,
    table:      String,
    column:     String,
  },
}

/// Compare what the store reports for `collection` against its descriptor.
///
/// `attributes` is the table's column list (empty if the table is missing)
/// and `keys` is every foreign key declared anywhere in the store.
pub fn verify(
  collection: Collection,
  attributes: &[Attribute],
  keys: &[ForeignKey],
) -> Vec<SchemaProblem> {
  if attributes.is_empty() {
    return vec![SchemaProblem::MissingTable(collection)];
  }

  let schema = CollectionSchema::of(collection);
  let mut problems = Vec::new();

  let identity = identity_attribute(collection, attributes);
  if identity != Some(schema.identity) {
    problems.push(SchemaProblem::Identity {
      collection,
      expected: schema.identity,
      found: identity.map(str::to_owned),
    });
  }

  match label_attribute(collection, attributes) {
    None => problems.push(SchemaProblem::MissingLabel(collection)),
    Some(label) if label != schema.label => {
      problems.push(SchemaProblem::Label {
        collection,
        expected: schema.label,
        found: label.to_owned(),
      })
    }
    Some(_) => {}
  }

  for column in text_attributes(collection, attributes) {
    if !schema.text_attributes.contains(&column) {
      problems.push(SchemaProblem::UncoveredText {
        collection,
        column: column.to_owned(),
      });
    }
  }

  let declared = inbound_keys(collection, keys);
  for edge in schema.inbound_edges() {
    let present = declared.iter().any(|(table, column, _)| {
      table.eq_ignore_ascii_case(edge.referencing_table())
        && column.eq_ignore_ascii_case(edge.referencing_column())
    });
    if !present {
      problems.push(SchemaProblem::MissingEdge {
        collection,
        table: edge.referencing_table(),
        column: edge.referencing_column(),
      });
    }
  }
  for (table, column, _) in declared {
    let known = schema.inbound_edges().any(|edge| {
      table.eq_ignore_ascii_case(edge.referencing_table())
        && column.eq_ignore_ascii_case(edge.referencing_column())
    });
    if !known {
      problems.push(SchemaProblem::UnknownEdge {
        collection,
        table: table.to_owned(),
        column: column.to_owned(),
      });
    }
  }

  problems
}
