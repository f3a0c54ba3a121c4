//! Handlers for `/maintenance` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/maintenance/export-csv` | `text/csv` attachment named `export.csv` |
//! | `GET`  | `/maintenance/backup` | Reports whether the database file exists; copies nothing |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use scolarite_core::{export::render_students_csv, store::SchoolStore};
use serde::Serialize;

use crate::error::ApiError;

/// `GET /maintenance/export-csv`
pub async fn export_csv<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Response, ApiError> {
  let rows = store.export_rows().await.map_err(ApiError::rejected)?;
  let csv  = render_students_csv(&rows);

  Ok(
    (
      [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (header::CONTENT_DISPOSITION, "attachment; filename=export.csv"),
      ],
      csv,
    )
      .into_response(),
  )
}

#[derive(Debug, Serialize)]
pub struct BackupBody {
  pub message: &'static str,
  /// File name of the database, without its directory.
  pub file:    String,
}

/// `GET /maintenance/backup`
pub async fn backup<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<BackupBody>, ApiError> {
  let not_found = || ApiError::NotFound("Fichier non trouvé".to_owned());

  let path = store.database_file().ok_or_else(not_found)?;
  match tokio::fs::try_exists(path).await {
    Ok(true) => {}
    Ok(false) => return Err(not_found()),
    Err(e) => {
      tracing::warn!(error = %e, path = %path.display(), "cannot check database file");
      return Err(not_found());
    }
  }

  let file = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .ok_or_else(not_found)?;

  Ok(Json(BackupBody { message: "Sauvegarde réussie", file }))
}
