//! Every statement the store issues, as literals.
//!
//! Identifiers are never spliced into SQL at runtime: each statement is picked
//! by matching on a [`Collection`] or [`Edge`] variant, and only values are
//! bound as parameters.
//!
//! Labels are compared through `dex_fold` (registered in `functions`), never
//! through SQLite's ASCII-only `LOWER`.

use dex_core::collection::{Collection, DetachPolicy, Edge};

// ─── Entity collections ──────────────────────────────────────────────────────

/// `(id, label)` for every row, ascending identity.
pub fn select_labels(c: Collection) -> &'static str {
  match c {
    Collection::Creature => "SELECT id, name FROM pokemon ORDER BY id",
    Collection::Type => "SELECT id, name FROM types ORDER BY id",
    Collection::Ability => "SELECT id, name FROM abilities ORDER BY id",
    Collection::Trainer => "SELECT id, name FROM trainers ORDER BY id",
  }
}

/// `?1` = new label, `?2` = id.
pub fn update_label(c: Collection) -> &'static str {
  match c {
    Collection::Creature => "UPDATE pokemon SET name = ?1 WHERE id = ?2",
    Collection::Type => "UPDATE types SET name = ?1 WHERE id = ?2",
    Collection::Ability => "UPDATE abilities SET name = ?1 WHERE id = ?2",
    Collection::Trainer => "UPDATE trainers SET name = ?1 WHERE id = ?2",
  }
}

/// `?1` = id.
pub fn delete_row(c: Collection) -> &'static str {
  match c {
    Collection::Creature => "DELETE FROM pokemon WHERE id = ?1",
    Collection::Type => "DELETE FROM types WHERE id = ?1",
    Collection::Ability => "DELETE FROM abilities WHERE id = ?1",
    Collection::Trainer => "DELETE FROM trainers WHERE id = ?1",
  }
}

/// Lowest id whose label matches `?1`, trimmed and case-insensitively.
pub fn find_by_label(c: Collection) -> &'static str {
  match c {
    Collection::Creature => {
      "SELECT id FROM pokemon WHERE dex_fold(name) = dex_fold(?1) ORDER BY id LIMIT 1"
    }
    Collection::Type => {
      "SELECT id FROM types WHERE dex_fold(name) = dex_fold(?1) ORDER BY id LIMIT 1"
    }
    Collection::Ability => {
      "SELECT id FROM abilities WHERE dex_fold(name) = dex_fold(?1) ORDER BY id LIMIT 1"
    }
    Collection::Trainer => {
      "SELECT id FROM trainers WHERE dex_fold(name) = dex_fold(?1) ORDER BY id LIMIT 1"
    }
  }
}

/// Insert a row with only its label set. `?1` = label.
pub fn insert_labelled(c: Collection) -> &'static str {
  match c {
    Collection::Creature => {
      "INSERT INTO pokemon (name, type1_id, type2_id) VALUES (?1, NULL, NULL)"
    }
    Collection::Type => "INSERT INTO types (name) VALUES (?1)",
    Collection::Ability => "INSERT INTO abilities (name) VALUES (?1)",
    Collection::Trainer => "INSERT INTO trainers (name) VALUES (?1)",
  }
}

// ─── Foreign-key edges ───────────────────────────────────────────────────────

/// Point references at a survivor. `?1` = survivor id, `?2` = duplicate id.
pub fn remap(e: Edge) -> &'static str {
  match e {
    Edge::CreatureFirstType => "UPDATE pokemon SET type1_id = ?1 WHERE type1_id = ?2",
    Edge::CreatureSecondType => "UPDATE pokemon SET type2_id = ?1 WHERE type2_id = ?2",
    Edge::LinkCreature => {
      "UPDATE trainer_pokemon_abilities SET pokemon_id = ?1 WHERE pokemon_id = ?2"
    }
    Edge::LinkAbility => {
      "UPDATE trainer_pokemon_abilities SET ability_id = ?1 WHERE ability_id = ?2"
    }
    Edge::LinkTrainer => {
      "UPDATE trainer_pokemon_abilities SET trainer_id = ?1 WHERE trainer_id = ?2"
    }
  }
}

/// Release references to a row about to be purged. `?1` = purged id.
///
/// `Nullify` clears the referencing column; `Cascade` deletes the referencing
/// row. Each edge's [`Edge::detach_policy`] picks which one runs.
pub fn detach(e: Edge, policy: DetachPolicy) -> &'static str {
  use DetachPolicy::{Cascade, Nullify};

  match (policy, e) {
    (Nullify, Edge::CreatureFirstType) => {
      "UPDATE pokemon SET type1_id = NULL WHERE type1_id = ?1"
    }
    (Nullify, Edge::CreatureSecondType) => {
      "UPDATE pokemon SET type2_id = NULL WHERE type2_id = ?1"
    }
    (Nullify, Edge::LinkCreature) => {
      "UPDATE trainer_pokemon_abilities SET pokemon_id = NULL WHERE pokemon_id = ?1"
    }
    (Nullify, Edge::LinkAbility) => {
      "UPDATE trainer_pokemon_abilities SET ability_id = NULL WHERE ability_id = ?1"
    }
    (Nullify, Edge::LinkTrainer) => {
      "UPDATE trainer_pokemon_abilities SET trainer_id = NULL WHERE trainer_id = ?1"
    }
    (Cascade, Edge::CreatureFirstType) => "DELETE FROM pokemon WHERE type1_id = ?1",
    (Cascade, Edge::CreatureSecondType) => "DELETE FROM pokemon WHERE type2_id = ?1",
    (Cascade, Edge::LinkCreature) => {
      "DELETE FROM trainer_pokemon_abilities WHERE pokemon_id = ?1"
    }
    (Cascade, Edge::LinkAbility) => {
      "DELETE FROM trainer_pokemon_abilities WHERE ability_id = ?1"
    }
    (Cascade, Edge::LinkTrainer) => {
      "DELETE FROM trainer_pokemon_abilities WHERE trainer_id = ?1"
    }
  }
}

/// Release references that already point at nothing, the same way
/// [`detach`] would. No parameters.
pub fn detach_orphans(e: Edge, policy: DetachPolicy) -> &'static str {
  use DetachPolicy::{Cascade, Nullify};

  match (policy, e) {
    (Nullify, Edge::CreatureFirstType) => {
      "UPDATE pokemon SET type1_id = NULL
       WHERE type1_id IS NOT NULL AND type1_id NOT IN (SELECT id FROM types)"
    }
    (Nullify, Edge::CreatureSecondType) => {
      "UPDATE pokemon SET type2_id = NULL
       WHERE type2_id IS NOT NULL AND type2_id NOT IN (SELECT id FROM types)"
    }
    (Nullify, Edge::LinkCreature) => {
      "UPDATE trainer_pokemon_abilities SET pokemon_id = NULL
       WHERE pokemon_id NOT IN (SELECT id FROM pokemon)"
    }
    (Nullify, Edge::LinkAbility) => {
      "UPDATE trainer_pokemon_abilities SET ability_id = NULL
       WHERE ability_id NOT IN (SELECT id FROM abilities)"
    }
    (Nullify, Edge::LinkTrainer) => {
      "UPDATE trainer_pokemon_abilities SET trainer_id = NULL
       WHERE trainer_id NOT IN (SELECT id FROM trainers)"
    }
    (Cascade, Edge::CreatureFirstType) => {
      "DELETE FROM pokemon
       WHERE type1_id IS NOT NULL AND type1_id NOT IN (SELECT id FROM types)"
    }
    (Cascade, Edge::CreatureSecondType) => {
      "DELETE FROM pokemon
       WHERE type2_id IS NOT NULL AND type2_id NOT IN (SELECT id FROM types)"
    }
    (Cascade, Edge::LinkCreature) => {
      "DELETE FROM trainer_pokemon_abilities
       WHERE pokemon_id NOT IN (SELECT id FROM pokemon)"
    }
    (Cascade, Edge::LinkAbility) => {
      "DELETE FROM trainer_pokemon_abilities
       WHERE ability_id NOT IN (SELECT id FROM abilities)"
    }
    (Cascade, Edge::LinkTrainer) => {
      "DELETE FROM trainer_pokemon_abilities
       WHERE trainer_id NOT IN (SELECT id FROM trainers)"
    }
  }
}

// ─── Ownership links ─────────────────────────────────────────────────────────

/// Keep the first of every set of identical (creature, ability, trainer) rows.
pub const COLLAPSE_LINKS: &str = "
  DELETE FROM trainer_pokemon_abilities
  WHERE rowid NOT IN (
    SELECT MIN(rowid) FROM trainer_pokemon_abilities
    GROUP BY pokemon_id, ability_id, trainer_id
  )";

/// `?1` = creature, `?2` = ability, `?3` = trainer.
pub const INSERT_LINK: &str = "
  INSERT INTO trainer_pokemon_abilities (pokemon_id, ability_id, trainer_id)
  VALUES (?1, ?2, ?3)";

/// `?1` = first type, `?2` = second type, `?3` = creature.
pub const SET_CREATURE_TYPES: &str =
  "UPDATE pokemon SET type1_id = ?1, type2_id = ?2 WHERE id = ?3";

/// One trainer, uniformly at random among those with a label. A nameless
/// trainer could not be reported back to the caller.
pub const PICK_TRAINER: &str =
  "SELECT id, name FROM trainers WHERE name IS NOT NULL ORDER BY RANDOM() LIMIT 1";

// ─── Lookups ─────────────────────────────────────────────────────────────────
//
// Each takes `?1` = the searched label and returns one name column.

pub const CREATURES_BY_ABILITY: &str = "
  SELECT DISTINCT p.name
  FROM trainer_pokemon_abilities l
  JOIN pokemon p ON p.id = l.pokemon_id
  WHERE l.ability_id IN (
    SELECT id FROM abilities WHERE dex_fold(name) = dex_fold(?1)
  )
    AND p.name IS NOT NULL
  ORDER BY p.name";

pub const CREATURES_BY_TYPE: &str = "
  SELECT DISTINCT p.name
  FROM pokemon p
  JOIN types t ON t.id = p.type1_id OR t.id = p.type2_id
  WHERE dex_fold(t.name) = dex_fold(?1)
    AND p.name IS NOT NULL
  ORDER BY p.name";

pub const TRAINERS_BY_CREATURE: &str = "
  SELECT DISTINCT t.name
  FROM trainer_pokemon_abilities l
  JOIN trainers t ON t.id = l.trainer_id
  WHERE l.pokemon_id IN (
    SELECT id FROM pokemon WHERE dex_fold(name) = dex_fold(?1)
  )
    AND t.name IS NOT NULL
  ORDER BY t.name";

pub const ABILITIES_BY_CREATURE: &str = "
  SELECT DISTINCT a.name
  FROM trainer_pokemon_abilities l
  JOIN abilities a ON a.id = l.ability_id
  WHERE l.pokemon_id IN (
    SELECT id FROM pokemon WHERE dex_fold(name) = dex_fold(?1)
  )
    AND a.name IS NOT NULL
  ORDER BY a.name";

// ─── Introspection ───────────────────────────────────────────────────────────

/// `?1` = table name.
pub const TABLE_INFO: &str =
  "SELECT name, COALESCE(type, '') FROM pragma_table_info(?1) ORDER BY cid";

pub const USER_TABLES: &str =
  "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'";

/// `?1` = referencing table name.
pub const FOREIGN_KEYS: &str =
  "SELECT \"table\", \"from\", \"to\" FROM pragma_foreign_key_list(?1)";

pub const FOREIGN_KEY_CHECK: &str = "PRAGMA foreign_key_check";
