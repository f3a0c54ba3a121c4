//! JSON REST API for the Scolarité registry.
//!
//! Exposes an axum [`Router`] backed by any [`scolarite_core::store::SchoolStore`].
//! CORS, tracing and static files are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", scolarite_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod maintenance;
pub mod programs;
pub mod response;
pub mod settings;
pub mod stats;
pub mod students;
pub mod years;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use scolarite_core::store::SchoolStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: SchoolStore + 'static,
{
  Router::new()
    // Settings
    .route("/settings", get(settings::get_one::<S>).post(settings::update::<S>))
    // Dashboard
    .route("/stats", get(stats::handler::<S>))
    // Students
    .route("/etudiants", get(students::list::<S>).post(students::create::<S>))
    .route("/etudiants/{id}", delete(students::remove::<S>))
    // Programs
    .route("/filieres", get(programs::list::<S>).post(programs::create::<S>))
    .route("/filieres/{id}", delete(programs::remove::<S>))
    // Academic years
    .route("/annees", get(years::list::<S>).post(years::create::<S>))
    .route("/annees/{id}", delete(years::remove::<S>))
    // Maintenance
    .route("/maintenance/export-csv", get(maintenance::export_csv::<S>))
    .route("/maintenance/backup", get(maintenance::backup::<S>))
    .with_state(store)
}
