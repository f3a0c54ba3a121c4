//! CSV rendering of the student export.
//!
//! Fields containing a comma, a double quote, or a line break are wrapped in
//! double quotes with embedded quotes doubled (RFC 4180). Every other field is
//! written verbatim, so simple data renders exactly as a naive comma join.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub const CSV_HEADER: &str = "Matricule,Nom,Prenom,Filiere";

/// One line of the export: a student joined with its program name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
  pub matricule:   String,
  pub nom:         String,
  pub prenom:      String,
  pub nom_filiere: String,
}

impl ExportRow {
  pub fn new(
    matricule: impl Into<String>,
    nom: impl Into<String>,
    prenom: impl Into<String>,
    nom_filiere: impl Into<String>,
  ) -> Self {
    Self {
      matricule:   matricule.into(),
      nom:         nom.into(),
      prenom:      prenom.into(),
      nom_filiere: nom_filiere.into(),
    }
  }

  fn to_line(&self) -> String {
    [&self.matricule, &self.nom, &self.prenom, &self.nom_filiere]
      .into_iter()
      .map(|f| escape_field(f))
      .collect::<Vec<_>>()
      .join(",")
  }
}

/// Quote `value` if it would otherwise break the CSV structure.
pub fn escape_field(value: &str) -> Cow<'_, str> {
  if value.contains([',', '"', '\n', '\r']) {
    Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
  } else {
    Cow::Borrowed(value)
  }
}

/// Render the header followed by one line per row.
///
/// The header is always followed by `\n`; rows are separated by `\n` with no
/// trailing newline.
pub fn render_students_csv(rows: &[ExportRow]) -> String {
  let body = rows
    .iter()
    .map(ExportRow::to_line)
    .collect::<Vec<_>>()
    .join("\n");
  format!("{CSV_HEADER}\n{body}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_rows_render_unquoted() {
    let rows = vec![
      ExportRow::new("M1", "Dupont", "Jean", "Math"),
      ExportRow::new("M2", "Ali", "Sam", "Physics"),
    ];
    assert_eq!(
      render_students_csv(&rows),
      "Matricule,Nom,Prenom,Filiere\nM1,Dupont,Jean,Math\nM2,Ali,Sam,Physics"
    );
  }

  #[test]
  fn empty_export_is_header_only() {
    assert_eq!(render_students_csv(&[]), "Matricule,Nom,Prenom,Filiere\n");
  }

  #[test]
  fn field_with_comma_is_quoted() {
    let rows = vec![ExportRow::new("M3", "Martin, Jr", "Luc", "Math")];
    assert_eq!(
      render_students_csv(&rows),
      "Matricule,Nom,Prenom,Filiere\nM3,\"Martin, Jr\",Luc,Math"
    );
  }

  #[test]
  fn escape_field_doubles_quotes_and_wraps_newlines() {
    assert_eq!(escape_field("plain"), "plain");
    assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    assert_eq!(escape_field("cr\rhere"), "\"cr\rhere\"");
  }

  #[test]
  fn export_row_serializes_with_column_names() {
    let row  = ExportRow::new("M1", "Dupont", "Jean", "Math");
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["nom_filiere"], "Math");
  }
}
