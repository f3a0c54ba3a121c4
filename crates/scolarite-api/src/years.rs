//! Handlers for `/annees` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
};
use scolarite_core::{
  store::SchoolStore,
  year::{AcademicYear, NewAcademicYear},
};

use crate::{
  error::ApiError,
  response::{Data, Message},
};

pub const DELETE_BLOCKED: &str =
  "Impossible de supprimer : des étudiants sont peut-être liés à cette année.";

/// `GET /annees`: label descending, compared as text.
pub async fn list<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Data<AcademicYear>>, ApiError> {
  let years = store.list_years().await.map_err(ApiError::store)?;
  Ok(Json(years.into()))
}

/// `POST /annees`: body: `{"libelle":"2024-2025"}`
pub async fn create<S: SchoolStore>(
  State(store): State<Arc<S>>,
  payload: Result<Json<NewAcademicYear>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
  let Json(body) = payload?;
  let id = store.create_year(body).await.map_err(ApiError::rejected)?;
  tracing::info!(id, "academic year created");
  Ok(Json(Message::new("Année ajoutée")))
}

/// `DELETE /annees/:id`
pub async fn remove<S: SchoolStore>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
  let Path(id) = id?;
  store
    .delete_year(id)
    .await
    .map_err(|e| ApiError::delete_failed(e, DELETE_BLOCKED))?;
  Ok(Json(Message::new("Année supprimée avec succès")))
}
