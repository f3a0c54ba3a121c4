//! Student records and the input used to enrol one.

use serde::{Deserialize, Serialize};

/// A student as listed by the API: the `etudiant` row joined with its
/// program name and academic-year label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
  pub id_etudiant:    i64,
  pub matricule:      String,
  pub nom:            String,
  pub prenom:         String,
  /// Free-form text; not parsed.
  pub date_naissance: String,
  pub sexe:           String,
  pub id_filiere:     i64,
  pub id_annee:       i64,
  pub nom_filiere:    String,
  /// Label of the referenced academic year.
  pub annee:          String,
}

/// A reference to a program or year row as sent by a client.
///
/// Form-driven front-ends post ids as strings (`"3"`), so both JSON numbers
/// and strings are accepted. Integer-valued strings are normalised to
/// [`ForeignId::Id`]; any other string is kept as text and left to the
/// database, where it fails the foreign-key check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForeignId {
  Id(i64),
  Text(String),
}

impl ForeignId {
  pub fn as_id(&self) -> Option<i64> {
    match self {
      ForeignId::Id(id) => Some(*id),
      ForeignId::Text(_) => None,
    }
  }

  fn normalize(self) -> Self {
    match self {
      ForeignId::Text(s) => match s.trim().parse() {
        Ok(id) => ForeignId::Id(id),
        Err(_) => ForeignId::Text(s),
      },
      id => id,
    }
  }
}

impl Default for ForeignId {
  fn default() -> Self { ForeignId::Id(0) }
}

impl From<i64> for ForeignId {
  fn from(id: i64) -> Self { ForeignId::Id(id) }
}

fn foreign_id<'de, D>(deserializer: D) -> Result<ForeignId, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(ForeignId::deserialize(deserializer)?.normalize())
}

/// Input for [`SchoolStore::create_student`](crate::store::SchoolStore::create_student).
///
/// `id_filiere` and `id_annee` must reference existing rows; the store rejects
/// the insert otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub matricule:      String,
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub nom:            String,
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub prenom:         String,
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub date_naissance: String,
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub sexe:           String,
  #[serde(deserialize_with = "foreign_id")]
  pub id_filiere:     ForeignId,
  #[serde(deserialize_with = "foreign_id")]
  pub id_annee:       ForeignId,
}
