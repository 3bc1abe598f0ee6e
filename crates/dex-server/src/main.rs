//! dex-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, optionally loads seed SQL, cleans the dataset, and serves
//! the JSON API over HTTP.
//!
//! ```
//! cargo run -p dex-server -- --seed seed.sql --clean-only
//! ```

mod config;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use dex_api::AppState;
use dex_catalog::PokeApiClient;
use dex_core::store::DexStore;
use dex_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[derive(Parser)]
#[command(author, version, about = "Creature dataset server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Execute this SQL file against the store before cleaning.
  #[arg(long)]
  seed: Option<PathBuf>,

  /// Clean the dataset and exit without serving.
  #[arg(long)]
  clean_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = ::config::Config::builder()
    .add_source(::config::File::from(cli.config).required(false))
    .add_source(::config::Environment::with_prefix("DEX"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store_path = expand_tilde(&server_cfg.store_path);

  // Open SQLite store; this also verifies the table shapes.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  if let Some(seed) = &cli.seed {
    let sql = tokio::fs::read_to_string(seed)
      .await
      .with_context(|| format!("failed to read seed file {seed:?}"))?;
    store
      .seed(sql)
      .await
      .with_context(|| format!("failed to load seed file {seed:?}"))?;
    tracing::info!(path = ?seed, "seed loaded");
  }

  if cli.clean_only || server_cfg.clean_on_startup {
    store.clean().await.context("cleaning run failed")?;
  }
  if cli.clean_only {
    return Ok(());
  }

  let catalog = PokeApiClient::new(
    &server_cfg.catalog_base_url,
    server_cfg.catalog_timeout(),
  )
  .context("failed to build catalog client")?;

  // Build application state.
  let state = AppState {
    store:   Arc::new(store),
    catalog: Arc::new(catalog),
  };

  let app = dex_api::api_router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
