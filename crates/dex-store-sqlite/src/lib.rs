//! SQLite backend for the creature dataset.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Every operation is a single `call`
//! closure; transactions opened inside one roll back if the closure returns
//! early.

mod clean;
mod functions;
mod ingest;
mod introspect;
mod schema;
mod sql;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use introspect::Introspection;
pub use store::SqliteStore;
