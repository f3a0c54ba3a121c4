//! Handler for `GET /stats`.
//!
//! The three aggregates are independent and run concurrently. If any of them
//! fails the whole request fails; partial results are never returned.

use std::sync::Arc;

use axum::{Json, extract::State};
use scolarite_core::{stats::Stats, store::SchoolStore};

use crate::error::ApiError;

/// Run the dashboard aggregates against `store` and combine them.
pub async fn collect<S: SchoolStore>(store: &S) -> Result<Stats, S::Error> {
  let (total_etudiants, total_filieres, repartition_filiere) = tokio::try_join!(
    store.count_students(),
    store.count_programs(),
    store.program_breakdown(),
  )?;

  Ok(Stats {
    total_etudiants,
    total_filieres,
    repartition_filiere,
  })
}

/// `GET /stats`
pub async fn handler<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Stats>, ApiError> {
  let stats = collect(store.as_ref()).await.map_err(ApiError::store)?;
  Ok(Json(stats))
}
