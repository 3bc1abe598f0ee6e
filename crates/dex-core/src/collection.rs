//! The fixed set of collections the engine knows about.
//!
//! There is no runtime discovery of tables: every collection and every foreign
//! key edge is a variant of a closed enum, and backends select their SQL by
//! matching on those variants.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator as _};

// ─── Entity collections ──────────────────────────────────────────────────────

/// One of the four entity collections.
///
/// Declaration order is the cleaning order: creatures first, so their
/// ownership links are remapped before the ability and trainer passes look at
/// them.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
  Creature,
  Type,
  Ability,
  Trainer,
}

impl Collection {
  /// All collections, in cleaning order.
  pub fn cleaning_order() -> impl Iterator<Item = Self> { Self::iter() }

  /// Name of the backing table.
  pub fn table(self) -> &'static str {
    match self {
      Self::Creature => "pokemon",
      Self::Type => "types",
      Self::Ability => "abilities",
      Self::Trainer => "trainers",
    }
  }

  /// Singular noun used by the attribute-name heuristics (`<singular>_id`).
  pub fn singular(self) -> &'static str {
    match self {
      Self::Creature => "pokemon",
      Self::Type => "type",
      Self::Ability => "ability",
      Self::Trainer => "trainer",
    }
  }
}

/// Table holding the ternary (creature, ability, trainer) ownership facts.
pub const OWNERSHIP_TABLE: &str = "trainer_pokemon_abilities";

// ─── Foreign-key edges ───────────────────────────────────────────────────────

/// What to do with a referencing row when the row it points at is purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetachPolicy {
  /// The referencing column is nullable; set it to NULL.
  Nullify,
  /// The referencing row is meaningless without its target; delete it.
  Cascade,
}

/// Every declared foreign-key edge in the schema.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
  CreatureFirstType,
  CreatureSecondType,
  LinkCreature,
  LinkAbility,
  LinkTrainer,
}

impl Edge {
  /// The collection this edge points at.
  pub fn target(self) -> Collection {
    match self {
      Self::CreatureFirstType | Self::CreatureSecondType => Collection::Type,
      Self::LinkCreature => Collection::Creature,
      Self::LinkAbility => Collection::Ability,
      Self::LinkTrainer => Collection::Trainer,
    }
  }

  /// Table holding the referencing column.
  pub fn referencing_table(self) -> &'static str {
    match self {
      Self::CreatureFirstType | Self::CreatureSecondType => {
        Collection::Creature.table()
      }
      Self::LinkCreature | Self::LinkAbility | Self::LinkTrainer => {
        OWNERSHIP_TABLE
      }
    }
  }

  /// The referencing column.
  pub fn referencing_column(self) -> &'static str {
    match self {
      Self::CreatureFirstType => "type1_id",
      Self::CreatureSecondType => "type2_id",
      Self::LinkCreature => "pokemon_id",
      Self::LinkAbility => "ability_id",
      Self::LinkTrainer => "trainer_id",
    }
  }

  pub fn detach_policy(self) -> DetachPolicy {
    match self {
      Self::CreatureFirstType | Self::CreatureSecondType => DetachPolicy::Nullify,
      Self::LinkCreature | Self::LinkAbility | Self::LinkTrainer => {
        DetachPolicy::Cascade
      }
    }
  }

  /// Every edge, in declaration order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }

  /// All edges pointing at `target`, in declaration order.
  pub fn inbound(target: Collection) -> impl Iterator<Item = Self> {
    Self::iter().filter(move |e| e.target() == target)
  }
}
