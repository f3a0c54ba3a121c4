//! Handlers for `/filieres` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
};
use scolarite_core::{
  program::{NewProgram, Program},
  store::SchoolStore,
};

use crate::{
  error::ApiError,
  response::{Data, Message},
};

pub const DELETE_BLOCKED: &str =
  "Impossible de supprimer : des étudiants sont peut-être liés à cette filière.";

/// `GET /filieres`: ordered by name.
pub async fn list<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Data<Program>>, ApiError> {
  let programs = store.list_programs().await.map_err(ApiError::store)?;
  Ok(Json(programs.into()))
}

/// `POST /filieres`: body: `{"code_filiere":"...","nom_filiere":"..."}`
pub async fn create<S: SchoolStore>(
  State(store): State<Arc<S>>,
  payload: Result<Json<NewProgram>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
  let Json(body) = payload?;
  let id = store.create_program(body).await.map_err(ApiError::rejected)?;
  tracing::info!(id, "program created");
  Ok(Json(Message::new("Filière ajoutée")))
}

/// `DELETE /filieres/:id`: refused while students are enrolled.
pub async fn remove<S: SchoolStore>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
  let Path(id) = id?;
  store
    .delete_program(id)
    .await
    .map_err(|e| ApiError::delete_failed(e, DELETE_BLOCKED))?;
  Ok(Json(Message::new("Filière supprimée avec succès")))
}
