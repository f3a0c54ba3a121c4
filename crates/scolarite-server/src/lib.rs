//! HTTP server assembly for Scolarité.
//!
//! Combines the JSON API from `scolarite-api` with static file serving for
//! the front-end, permissive CORS, and per-request tracing.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use scolarite_core::store::SchoolStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SCOLARITE_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file; created on first start.
  pub database_path: PathBuf,
  /// Directory holding the pre-built front-end.
  pub static_dir:    PathBuf,
}

impl ServerConfig {
  /// Load configuration from `path` (optional) layered under the
  /// environment. Missing keys fall back to the defaults.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 3000_i64)?
      .set_default("database_path", "gestion_etudiants.db")?
      .set_default("static_dir", "public")?
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("SCOLARITE"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: `/api/*` backed by `store`, every other path
/// served from `static_dir`.
pub fn router<S>(store: Arc<S>, static_dir: &Path) -> Router
where
  S: SchoolStore + 'static,
{
  Router::new()
    .nest("/api", scolarite_api::api_router(store))
    .fallback_service(ServeDir::new(static_dir))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
