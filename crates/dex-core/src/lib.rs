//! Core types and trait definitions for the creature dataset.
//!
//! This crate is deliberately free of HTTP and database dependencies. It holds
//! the fixed collection descriptors, the label normalizer, the duplicate
//! planner, and the store/catalog traits that the backends implement.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod collection;
pub mod dedup;
pub mod error;
pub mod ingest;
pub mod junk;
pub mod normalize;
pub mod report;
pub mod schema;
pub mod store;

pub use error::{Error, Result};
