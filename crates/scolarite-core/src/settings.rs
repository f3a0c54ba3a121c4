//! Settings: the singleton branding record for the institution.

use serde::{Deserialize, Serialize};

/// Name returned when the settings row is missing. Never persisted.
pub const FALLBACK_INSTITUTION_NAME: &str = "Établissement Scolaire";

/// Name written into the settings row the first time a store is opened.
pub const SEEDED_INSTITUTION_NAME: &str = "Université Polytechnique Centrale";

/// The institution's display name and logo. Stored as row `id = 1` of
/// `parametres`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub universite_nom:  String,
  /// Usually a data URL or an image path; may be empty.
  #[serde(default, deserialize_with = "crate::nullable::text")]
  pub universite_logo: String,
}

impl Settings {
  pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
    Self {
      universite_nom:  name.into(),
      universite_logo: logo.into(),
    }
  }
}

impl Default for Settings {
  fn default() -> Self { Self::new(FALLBACK_INSTITUTION_NAME, "") }
}
