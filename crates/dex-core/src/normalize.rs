//! Label canonicalization.
//!
//! A canonical label is trimmed, corrected against a table of known
//! misspellings, and otherwise title-cased word by word. The cleaning engine
//! and the ingestion path both go through [`normalize`], so a label written
//! by either one is already in the form the other expects.

/// Known misspellings, keyed by their lowercase form. Corrections are stored
/// already in canonical casing and are returned verbatim.
const MISSPELLINGS: &[(&str, &str)] = &[
  // creatures
  ("pikuchu", "Pikachu"),
  ("charzard", "Charizard"),
  ("bulbasaurrr", "Bulbasaur"),
  ("bulbasuar", "Bulbasaur"),
  ("squirtel", "Squirtle"),
  ("charmanderr", "Charmander"),
  // types
  ("gras", "Grass"),
  ("eletric", "Electric"),
  ("psycic", "Psychic"),
  ("poisen", "Poison"),
  ("poision", "Poison"),
  // abilities; hyphenated to match the catalog's spelling
  ("overgroww", "Overgrow"),
  ("torrentt", "Torrent"),
  ("run away", "Run-away"),
  ("keen eye", "Keen-eye"),
  ("rock head", "Rock-head"),
  // trainers
  ("ashh", "Ash"),
  ("misty", "Misty"),
];

/// Look up a trimmed label in the misspelling table, ignoring case.
pub fn correction(trimmed: &str) -> Option<&'static str> {
  let key = trimmed.to_lowercase();
  MISSPELLINGS
    .iter()
    .find(|(wrong, _)| *wrong == key)
    .map(|(_, right)| *right)
}

/// Map a raw label to its canonical form.
///
/// ```
/// use dex_core::normalize::normalize;
///
/// assert_eq!(normalize("  pikuchu "), "Pikachu");
/// assert_eq!(normalize("keen eye"), "Keen-eye");
/// assert_eq!(normalize("FIRE"), "Fire");
/// ```
pub fn normalize(raw: &str) -> String {
  let trimmed = raw.trim();
  if let Some(fixed) = correction(trimmed) {
    return fixed.to_owned();
  }
  trimmed
    .split_whitespace()
    .map(capitalize)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Canonicalize a name as the external catalog spells it (`keen-eye`,
/// `mr_mime`).
///
/// Characters that are neither alphanumeric nor `-` separate tokens; the
/// tokens are rejoined with single spaces and then run through [`normalize`],
/// so catalog-sourced labels collide with cleaned labels exactly when they
/// should.
pub fn catalog_label(raw: &str) -> String {
  let spaced: String = raw
    .chars()
    .map(|c| if c.is_alphanumeric() || c == '-' { c } else { ' ' })
    .collect();
  normalize(&spaced)
}

/// The key labels are grouped and compared by: trimmed and case-folded.
pub fn fold(label: &str) -> String { label.trim().to_lowercase() }

/// First character upper-cased, the rest lower-cased.
///
/// Only the first character of an upper-case expansion stays upper (`ß` gives
/// `Ss`, not `SS`), so a capitalized word capitalizes to itself.
fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  let Some(first) = chars.next() else {
    return String::new();
  };
  let mut upper = first.to_uppercase();
  let mut out = String::with_capacity(word.len());
  out.extend(upper.next());
  out.extend(upper.flat_map(char::to_lowercase));
  out.extend(chars.flat_map(char::to_lowercase));
  out
}
