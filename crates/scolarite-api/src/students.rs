//! Handlers for `/etudiants` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/etudiants` | Newest first, joined with program name and year label |
//! | `POST`   | `/etudiants` | Body: [`NewStudent`]; returns the generated id |
//! | `DELETE` | `/etudiants/:id` | Succeeds even if the id does not exist |

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
  student::{NewStudent, Student},
};
use serde::Serialize;

use crate::{
  error::ApiError,
  response::{Data, Message},
};

/// `GET /etudiants`
pub async fn list<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Data<Student>>, ApiError> {
  let students = store.list_students().await.map_err(ApiError::rejected)?;
  Ok(Json(students.into()))
}

#[derive(Debug, Serialize)]
pub struct CreatedBody {
  pub message: &'static str,
  pub id:      i64,
}

/// `POST /etudiants`
pub async fn create<S: SchoolStore>(
  State(store): State<Arc<S>>,
  payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<Json<CreatedBody>, ApiError> {
  let Json(body) = payload?;
  let id = store.create_student(body).await.map_err(ApiError::rejected)?;
  tracing::info!(id, "student created");
  Ok(Json(CreatedBody { message: "Étudiant ajouté", id }))
}

/// `DELETE /etudiants/:id`
pub async fn remove<S: SchoolStore>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
  let Path(id) = id?;
  store.delete_student(id).await.map_err(ApiError::rejected)?;
  Ok(Json(Message::new("Étudiant supprimé avec succès")))
}
