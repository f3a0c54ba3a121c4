//! Dashboard aggregates.

use serde::{Deserialize, Serialize};

/// Number of students enrolled in one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramCount {
  pub nom_filiere: String,
  pub count:       i64,
}

/// The combined dashboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
  pub total_etudiants:     i64,
  pub total_filieres:      i64,
  /// One entry per program, including programs with no students.
  pub repartition_filiere: Vec<ProgramCount>,
}
