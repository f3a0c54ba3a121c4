//! Handlers for `/settings`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/settings` | Falls back to the default name if the row is missing |
//! | `POST` | `/settings` | Body: `{"universite_nom":"...","universite_logo":"..."}` |

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use scolarite_core::{settings::Settings, store::SchoolStore};
use serde::Serialize;

use crate::error::ApiError;

/// `GET /settings`
pub async fn get_one<S: SchoolStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Settings>, ApiError> {
  let settings = store.get_settings().await.map_err(ApiError::store)?;
  Ok(Json(settings))
}

#[derive(Debug, Serialize)]
pub struct UpdatedBody {
  pub message:         &'static str,
  pub universite_logo: String,
}

/// `POST /settings`: echoes the stored logo back.
pub async fn update<S: SchoolStore>(
  State(store): State<Arc<S>>,
  payload: Result<Json<Settings>, JsonRejection>,
) -> Result<Json<UpdatedBody>, ApiError> {
  let Json(settings) = payload?;
  let universite_logo = settings.universite_logo.clone();

  store
    .update_settings(settings)
    .await
    .map_err(ApiError::rejected)?;

  Ok(Json(UpdatedBody {
    message: "Paramètres mis à jour avec succès",
    universite_logo,
  }))
}
