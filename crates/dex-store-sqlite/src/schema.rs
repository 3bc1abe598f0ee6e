//! SQL schema for the creature store.
//!
//! Executed once at connection startup. Table and column names are fixed and
//! mirror [`dex_core::collection`]. The unique label indexes are not part of
//! this DDL: dirty seed data must be loadable, so a committed cleaning run
//! installs them (see [`LABEL_GUARDS`]).

/// Bootstrap DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS types (
    id    INTEGER PRIMARY KEY,
    name  TEXT
);

CREATE TABLE IF NOT EXISTS abilities (
    id    INTEGER PRIMARY KEY,
    name  TEXT
);

CREATE TABLE IF NOT EXISTS trainers (
    id    INTEGER PRIMARY KEY,
    name  TEXT
);

-- Both type slots are optional; ingestion backfills them after insert.
CREATE TABLE IF NOT EXISTS pokemon (
    id        INTEGER PRIMARY KEY,
    name      TEXT,
    type1_id  INTEGER REFERENCES types(id),
    type2_id  INTEGER REFERENCES types(id)
);

-- One row per (creature, ability, trainer) ownership fact.
CREATE TABLE IF NOT EXISTS trainer_pokemon_abilities (
    id          INTEGER PRIMARY KEY,
    pokemon_id  INTEGER NOT NULL REFERENCES pokemon(id),
    ability_id  INTEGER NOT NULL REFERENCES abilities(id),
    trainer_id  INTEGER NOT NULL REFERENCES trainers(id)
);

CREATE INDEX IF NOT EXISTS links_pokemon_idx ON trainer_pokemon_abilities(pokemon_id);
CREATE INDEX IF NOT EXISTS links_ability_idx ON trainer_pokemon_abilities(ability_id);
CREATE INDEX IF NOT EXISTS links_trainer_idx ON trainer_pokemon_abilities(trainer_id);
";

/// One unique index per entity collection on the folded label.
///
/// Dropped at the start of every cleaning run (relabeling may pass through
/// transient collisions) and re-created just before commit.
pub const LABEL_GUARDS: &str = "
CREATE UNIQUE INDEX IF NOT EXISTS pokemon_label_uq   ON pokemon   (dex_fold(name));
CREATE UNIQUE INDEX IF NOT EXISTS types_label_uq     ON types     (dex_fold(name));
CREATE UNIQUE INDEX IF NOT EXISTS abilities_label_uq ON abilities (dex_fold(name));
CREATE UNIQUE INDEX IF NOT EXISTS trainers_label_uq  ON trainers  (dex_fold(name));
";

pub const DROP_LABEL_GUARDS: &str = "
DROP INDEX IF EXISTS pokemon_label_uq;
DROP INDEX IF EXISTS types_label_uq;
DROP INDEX IF EXISTS abilities_label_uq;
DROP INDEX IF EXISTS trainers_label_uq;
";
