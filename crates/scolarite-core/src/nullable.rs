//! Serde helpers for optional text in request bodies.

use serde::{Deserialize, Deserializer};

/// Read a string field, mapping JSON `null` to `""`. Combine with
/// `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
