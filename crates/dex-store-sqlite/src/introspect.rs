//! Reading the live table shapes back out of SQLite and holding them to the
//! collection descriptors.

use dex_core::{
  collection::Collection,
  schema::{self, Attribute, ForeignKey},
};
use rusqlite::Connection;

use crate::{Error, Result, sql};

/// What the store reports about one collection's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introspection {
  pub collection:      Collection,
  pub identity:        Option<String>,
  pub label:           Option<String>,
  pub text_attributes: Vec<String>,
  /// `(referencing table, referencing column, referenced column)` for every
  /// declared foreign key pointing at this collection.
  pub inbound:         Vec<(String, String, Option<String>)>,
}

pub fn attributes(conn: &Connection, table: &str) -> rusqlite::Result<Vec<Attribute>> {
  let mut stmt = conn.prepare_cached(sql::TABLE_INFO)?;
  stmt
    .query_map([table], |row| {
      Ok(Attribute { name: row.get(0)?, declared_type: row.get(1)? })
    })?
    .collect()
}

/// Every foreign key declared by any user table.
pub fn foreign_keys(conn: &Connection) -> rusqlite::Result<Vec<ForeignKey>> {
  let tables: Vec<String> = conn
    .prepare_cached(sql::USER_TABLES)?
    .query_map([], |row| row.get(0))?
    .collect::<rusqlite::Result<_>>()?;

  let mut keys = Vec::new();
  let mut stmt = conn.prepare_cached(sql::FOREIGN_KEYS)?;
  for table in tables {
    let rows = stmt.query_map([&table], |row| {
      Ok(ForeignKey {
        from_table:  table.clone(),
        from_column: row.get(1)?,
        to_table:    row.get(0)?,
        to_column:   row.get(2)?,
      })
    })?;
    for key in rows {
      keys.push(key?);
    }
  }
  Ok(keys)
}

pub fn introspect(conn: &Connection, collection: Collection) -> Result<Introspection> {
  let attrs = attributes(conn, collection.table())?;
  let keys = foreign_keys(conn)?;

  Ok(Introspection {
    collection,
    identity: schema::identity_attribute(collection, &attrs).map(str::to_owned),
    label: schema::label_attribute(collection, &attrs).map(str::to_owned),
    text_attributes: schema::text_attributes(collection, &attrs)
      .into_iter()
      .map(str::to_owned)
      .collect(),
    inbound: schema::inbound_keys(collection, &keys)
      .into_iter()
      .map(|(t, c, r)| (t.to_owned(), c.to_owned(), r.map(str::to_owned)))
      .collect(),
  })
}

/// Fail with [`Error::Schema`] unless every collection matches its descriptor.
pub fn verify(conn: &Connection) -> Result<()> {
  let keys = foreign_keys(conn)?;
  let mut problems = Vec::new();
  for collection in Collection::cleaning_order() {
    let attrs = attributes(conn, collection.table())?;
    problems.extend(schema::verify(collection, &attrs, &keys));
  }

  if problems.is_empty() {
    Ok(())
  } else {
    Err(Error::Schema(problems))
  }
}
