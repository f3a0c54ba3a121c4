//! Program (filière): an academic track a student is enrolled in.

use serde::{Deserialize, Serialize};

/// A stored program row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
  pub id_filiere:   i64,
  pub code_filiere: String,
  pub nom_filiere:  String,
}

/// Input for [`SchoolStore::create_program`](crate::store::SchoolStore::create_program).
///
/// Neither field is required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProgram {
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub code_filiere: String,
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub nom_filiere:  String,
}

impl NewProgram {
  pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      code_filiere: code.into(),
      nom_filiere:  name.into(),
    }
  }
}
