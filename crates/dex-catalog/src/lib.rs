//! HTTP client for a PokeAPI-compatible creature catalog.
//!
//! [`PokeApiClient`] implements [`dex_core::catalog::Catalog`]; the API layer
//! holds it behind that trait.

pub mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PokeApiClient};
pub use error::{Error, Result};
