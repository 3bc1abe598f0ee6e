//! Application-defined SQL functions.
//!
//! Registered on every connection before any statement runs. The label guard
//! indexes are built on [`FOLD`], so a connection without it cannot write to
//! the entity tables once a cleaning run has committed.

use dex_core::normalize::fold;
use rusqlite::{
  Connection,
  functions::{Context, FunctionFlags},
  types::ValueRef,
};

/// `dex_fold(label)`: the key labels are grouped and matched by, computed by
/// [`dex_core::normalize::fold`] so SQL and the dedup planner agree on every
/// script, not just ASCII. `NULL` stays `NULL`.
pub const FOLD: &str = "dex_fold";

pub fn register(conn: &Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    FOLD,
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    fold_value,
  )
}

fn fold_value(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
  let folded = match ctx.get_raw(0) {
    ValueRef::Text(text) => Some(fold(&String::from_utf8_lossy(text))),
    ValueRef::Integer(i) => Some(i.to_string()),
    ValueRef::Real(r) => Some(r.to_string()),
    ValueRef::Null | ValueRef::Blob(_) => None,
  };
  Ok(folded)
}
