//! Academic year: a labelled cohort such as `"2024-2025"`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
  pub id_annee: i64,
  pub libelle:  String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAcademicYear {
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub libelle: String,
}

impl NewAcademicYear {
  pub fn new(label: impl Into<String>) -> Self {
    Self { libelle: label.into() }
  }
}
