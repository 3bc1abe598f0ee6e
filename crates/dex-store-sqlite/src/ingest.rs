//! Writing a catalog creature into the store.

use dex_core::{
  collection::Collection,
  ingest::{IngestOutcome, IngestedCreature, NewCreature},
};
use rusqlite::{
  Connection, ErrorCode, OptionalExtension as _, Transaction,
  TransactionBehavior, params,
};

use crate::{Result, sql};

/// Lowest id in `collection` whose label folds to the same key as `label`.
pub fn find_label(
  conn: &Connection,
  collection: Collection,
  label: &str,
) -> rusqlite::Result<Option<i64>> {
  conn
    .query_row(sql::find_by_label(collection), [label], |row| row.get(0))
    .optional()
}

pub fn ingest(conn: &mut Connection, creature: &NewCreature) -> Result<IngestOutcome> {
  let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

  if find_label(&tx, Collection::Creature, &creature.label)?.is_some() {
    return Ok(IngestOutcome::AlreadyExists);
  }

  let trainer: Option<(i64, String)> = tx
    .query_row(sql::PICK_TRAINER, [], |row| Ok((row.get(0)?, row.get(1)?)))
    .optional()?;
  let Some((trainer_id, trainer)) = trainer else {
    return Ok(IngestOutcome::NoTrainers);
  };

  let id = match tx.execute(
    sql::insert_labelled(Collection::Creature),
    [&creature.label],
  ) {
    Ok(_) => tx.last_insert_rowid(),
    Err(e) if is_constraint_violation(&e) => {
      return Ok(IngestOutcome::AlreadyExists);
    }
    Err(e) => return Err(e.into()),
  };

  for ability in &creature.abilities {
    let ability_id = find_or_insert(&tx, Collection::Ability, ability)?;
    tx.execute(sql::INSERT_LINK, params![id, ability_id, trainer_id])?;
  }

  let type_ids = creature
    .types
    .iter()
    .map(|t| find_or_insert(&tx, Collection::Type, t))
    .collect::<rusqlite::Result<Vec<_>>>()?;
  tx.execute(
    sql::SET_CREATURE_TYPES,
    params![type_ids.first().copied(), type_ids.get(1).copied(), id],
  )?;

  tx.commit()?;

  Ok(IngestOutcome::Created(IngestedCreature {
    id,
    name: creature.label.clone(),
    trainer,
    abilities: creature.abilities.clone(),
    types: creature.types.clone(),
  }))
}

fn find_or_insert(
  tx: &Transaction<'_>,
  collection: Collection,
  label: &str,
) -> rusqlite::Result<i64> {
  if let Some(id) = find_label(tx, collection, label)? {
    return Ok(id);
  }
  tx.execute(sql::insert_labelled(collection), [label])?;
  Ok(tx.last_insert_rowid())
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _) if f.code == ErrorCode::ConstraintViolation
  )
}
