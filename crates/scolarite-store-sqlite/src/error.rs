//! Error type for `scolarite-store-sqlite`.

use scolarite_core::{ErrorKind, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(
        rusqlite::Error::SqliteFailure(e, _),
      )) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
        ErrorKind::Constraint
      }
      Error::Database(_) => ErrorKind::Persistence,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
