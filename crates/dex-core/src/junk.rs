//! Sentinel values that mark a record as garbage.

use crate::normalize::fold;

/// Placeholder strings purged wherever they show up in a text attribute.
pub const JUNK_VALUES: &[&str] = &["", "???", "---", "Remove This Ability"];

/// Whether `value` matches a junk value once both are trimmed and case-folded.
pub fn is_junk(value: &str) -> bool {
  let key = fold(value);
  JUNK_VALUES.iter().any(|junk| fold(junk) == key)
}
