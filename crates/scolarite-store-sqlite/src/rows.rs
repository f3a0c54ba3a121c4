//! Row decoding between SQLite result rows and domain types.
//!
//! Text columns are nullable in the schema; `NULL` is read back as an empty
//! string so that rows written by other tools never fail to decode.

use rusqlite::{Row, types::Value};
use scolarite_core::{
  export::ExportRow,
  program::Program,
  settings::Settings,
  stats::ProgramCount,
  student::{ForeignId, Student},
  year::AcademicYear,
};

fn text(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
  Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

/// Bind value for a client-supplied foreign key. Text is passed through so
/// the column affinity and the foreign-key check decide its fate.
pub fn foreign_id(id: ForeignId) -> Value {
  match id {
    ForeignId::Id(id) => Value::Integer(id),
    ForeignId::Text(s) => Value::Text(s),
  }
}

/// `SELECT universite_nom, universite_logo FROM parametres`
pub fn settings(row: &Row<'_>) -> rusqlite::Result<Settings> {
  Ok(Settings {
    universite_nom:  text(row, 0)?,
    universite_logo: text(row, 1)?,
  })
}

/// `SELECT id_filiere, code_filiere, nom_filiere FROM filiere`
pub fn program(row: &Row<'_>) -> rusqlite::Result<Program> {
  Ok(Program {
    id_filiere:   row.get(0)?,
    code_filiere: text(row, 1)?,
    nom_filiere:  text(row, 2)?,
  })
}

/// `SELECT id_annee, libelle FROM annee_academique`
pub fn year(row: &Row<'_>) -> rusqlite::Result<AcademicYear> {
  Ok(AcademicYear {
    id_annee: row.get(0)?,
    libelle:  text(row, 1)?,
  })
}

/// `SELECT e.id_etudiant, e.matricule, e.nom, e.prenom, e.date_naissance,
/// e.sexe, e.id_filiere, e.id_annee, f.nom_filiere, a.libelle`
pub fn student(row: &Row<'_>) -> rusqlite::Result<Student> {
  Ok(Student {
    id_etudiant:    row.get(0)?,
    matricule:      text(row, 1)?,
    nom:            text(row, 2)?,
    prenom:         text(row, 3)?,
    date_naissance: text(row, 4)?,
    sexe:           text(row, 5)?,
    id_filiere:     row.get(6)?,
    id_annee:       row.get(7)?,
    nom_filiere:    text(row, 8)?,
    annee:          text(row, 9)?,
  })
}

/// `SELECT f.nom_filiere, COUNT(e.id_etudiant)`
pub fn program_count(row: &Row<'_>) -> rusqlite::Result<ProgramCount> {
  Ok(ProgramCount {
    nom_filiere: text(row, 0)?,
    count:       row.get(1)?,
  })
}

/// `SELECT e.matricule, e.nom, e.prenom, f.nom_filiere`
pub fn export_row(row: &Row<'_>) -> rusqlite::Result<ExportRow> {
  Ok(ExportRow {
    matricule:   text(row, 0)?,
    nom:         text(row, 1)?,
    prenom:      text(row, 2)?,
    nom_filiere: text(row, 3)?,
  })
}
