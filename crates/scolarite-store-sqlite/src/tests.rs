//! Integration tests for `SqliteStore` against an in-memory database.

use scolarite_core::{
  ErrorKind, StoreError as _,
  program::NewProgram,
  settings::{FALLBACK_INSTITUTION_NAME, SEEDED_INSTITUTION_NAME, Settings},
  store::SchoolStore,
  student::{ForeignId, NewStudent},
  year::NewAcademicYear,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn student(matricule: &str, program: i64, year: i64) -> NewStudent {
  NewStudent {
    matricule:      matricule.into(),
    nom:            "Dupont".into(),
    prenom:         "Jean".into(),
    date_naissance: "2004-03-12".into(),
    sexe:           "M".into(),
    id_filiere:     program.into(),
    id_annee:       year.into(),
  }
}

/// A store holding one program and one year; returns their ids.
async fn seeded() -> (SqliteStore, i64, i64) {
  seed(store().await).await
}

/// Add one program and one year to `s`.
async fn seed(s: SqliteStore) -> (SqliteStore, i64, i64) {
  let program = s.create_program(NewProgram::new("INF", "Informatique")).await.unwrap();
  let year    = s.create_year(NewAcademicYear::new("2024-2025")).await.unwrap();
  (s, program, year)
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_store_returns_seeded_settings() {
  let s = store().await;
  let settings = s.get_settings().await.unwrap();
  assert_eq!(settings, Settings::new(SEEDED_INSTITUTION_NAME, ""));
}

#[tokio::test]
async fn update_then_get_settings_roundtrips() {
  let s = store().await;
  s.update_settings(Settings::new("Lycée Victor Hugo", "data:image/png;base64,AAA"))
    .await
    .unwrap();

  let settings = s.get_settings().await.unwrap();
  assert_eq!(settings.universite_nom, "Lycée Victor Hugo");
  assert_eq!(settings.universite_logo, "data:image/png;base64,AAA");
}

#[tokio::test]
async fn reopening_file_store_keeps_updated_settings() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("gestion_etudiants.db");

  let s = SqliteStore::open(&path).await.unwrap();
  s.update_settings(Settings::new("École Normale", "")).await.unwrap();
  drop(s);

  let reopened = SqliteStore::open(&path).await.unwrap();
  let settings = reopened.get_settings().await.unwrap();
  assert_eq!(settings.universite_nom, "École Normale");
  assert_eq!(reopened.database_file(), Some(path.as_path()));
}

#[tokio::test]
async fn missing_settings_row_falls_back_to_default() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("gestion_etudiants.db");
  let s    = SqliteStore::open(&path).await.unwrap();

  rusqlite::Connection::open(&path)
    .unwrap()
    .execute_batch("DELETE FROM parametres")
    .unwrap();

  let settings = s.get_settings().await.unwrap();
  assert_eq!(settings, Settings::default());
  assert_eq!(settings.universite_nom, FALLBACK_INSTITUTION_NAME);
  assert_eq!(settings.universite_logo, "");
}

#[tokio::test]
async fn in_memory_store_has_no_database_file() {
  let s = store().await;
  assert!(s.database_file().is_none());
}

// ─── Students ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_student_returns_increasing_ids() {
  let (s, program, year) = seeded().await;
  let first  = s.create_student(student("M1", program, year)).await.unwrap();
  let second = s.create_student(student("M2", program, year)).await.unwrap();
  assert!(second > first);
}

#[tokio::test]
async fn list_students_newest_first_with_joined_labels() {
  let (s, program, year) = seeded().await;
  s.create_student(student("M1", program, year)).await.unwrap();
  s.create_student(student("M2", program, year)).await.unwrap();
  s.create_student(student("M3", program, year)).await.unwrap();

  let students = s.list_students().await.unwrap();
  let order: Vec<_> = students.iter().map(|e| e.matricule.as_str()).collect();
  assert_eq!(order, ["M3", "M2", "M1"]);
  assert!(students.iter().all(|e| e.nom_filiere == "Informatique"));
  assert!(students.iter().all(|e| e.annee == "2024-2025"));
}

#[tokio::test]
async fn create_student_with_unknown_program_is_constraint_error() {
  let (s, _program, year) = seeded().await;

  let err = s.create_student(student("M1", 999, year)).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Constraint);
  assert_eq!(s.count_students().await.unwrap(), 0);
}

#[tokio::test]
async fn create_student_with_unknown_year_is_constraint_error() {
  let (s, program, _year) = seeded().await;

  let err = s.create_student(student("M1", program, 999)).await.unwrap_err();
  assert!(err.is_constraint_violation());
  assert!(s.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_student_with_text_id_is_constraint_error() {
  let (s, program, _year) = seeded().await;

  let mut input = student("M1", program, 0);
  input.id_annee = ForeignId::Text("abc".into());
  let err = s.create_student(input).await.unwrap_err();
  assert!(err.is_constraint_violation());
  assert!(err.to_string().contains("FOREIGN KEY"));
}

#[tokio::test]
async fn students_with_dangling_references_are_hidden_from_joined_reads() {
  let dir  = tempfile::tempdir().unwrap();
  let path = dir.path().join("gestion_etudiants.db");
  let (s, program, year) = seed(SqliteStore::open(&path).await.unwrap()).await;
  s.create_student(student("M1", program, year)).await.unwrap();

  let side = rusqlite::Connection::open(&path).unwrap();
  side.execute_batch("PRAGMA foreign_keys = OFF").unwrap();
  side
    .execute(
      "INSERT INTO etudiant (matricule, nom, prenom, date_naissance, sexe, id_filiere, id_annee)
       VALUES ('ORPHAN_P', 'X', 'Y', '', '', 999, ?1),
              ('ORPHAN_Y', 'X', 'Y', '', '', ?2, 999)",
      rusqlite::params![year, program],
    )
    .unwrap();
  drop(side);

  assert_eq!(s.count_students().await.unwrap(), 3);

  let listed: Vec<_> = s
    .list_students()
    .await
    .unwrap()
    .into_iter()
    .map(|e| e.matricule)
    .collect();
  assert_eq!(listed, ["M1"]);

  // Export only joins programs, so a missing year does not hide the row.
  let exported: Vec<_> = s
    .export_rows()
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.matricule)
    .collect();
  assert_eq!(exported, ["M1", "ORPHAN_Y"]);
}

#[tokio::test]
async fn delete_student_removes_row() {
  let (s, program, year) = seeded().await;
  let id = s.create_student(student("M1", program, year)).await.unwrap();

  s.delete_student(id).await.unwrap();
  assert_eq!(s.count_students().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_unknown_student_is_a_no_op() {
  let s = store().await;
  s.delete_student(12345).await.unwrap();
}

// ─── Programs ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_programs_sorted_by_name() {
  let s = store().await;
  s.create_program(NewProgram::new("PHY", "Physique")).await.unwrap();
  s.create_program(NewProgram::new("BIO", "Biologie")).await.unwrap();
  s.create_program(NewProgram::new("MAT", "Mathématiques")).await.unwrap();

  let names: Vec<_> = s
    .list_programs()
    .await
    .unwrap()
    .into_iter()
    .map(|p| p.nom_filiere)
    .collect();
  assert_eq!(names, ["Biologie", "Mathématiques", "Physique"]);
}

#[tokio::test]
async fn duplicate_program_codes_are_allowed() {
  let s = store().await;
  s.create_program(NewProgram::new("INF", "Informatique")).await.unwrap();
  s.create_program(NewProgram::new("INF", "Informatique")).await.unwrap();
  assert_eq!(s.count_programs().await.unwrap(), 2);
}

#[tokio::test]
async fn delete_program_blocked_while_students_reference_it() {
  let (s, program, year) = seeded().await;
  let id = s.create_student(student("M1", program, year)).await.unwrap();

  let err = s.delete_program(program).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Constraint);
  assert_eq!(s.list_programs().await.unwrap().len(), 1);
  assert_eq!(s.list_students().await.unwrap().len(), 1);

  s.delete_student(id).await.unwrap();
  s.delete_program(program).await.unwrap();
  assert!(s.list_programs().await.unwrap().is_empty());
}

// ─── Academic years ──────────────────────────────────────────────────────────

#[tokio::test]
async fn list_years_sorted_by_label_descending_as_text() {
  let s = store().await;
  for label in ["2023-2024", "10", "2025-2026", "2"] {
    s.create_year(NewAcademicYear::new(label)).await.unwrap();
  }

  let labels: Vec<_> = s
    .list_years()
    .await
    .unwrap()
    .into_iter()
    .map(|y| y.libelle)
    .collect();
  // Text comparison: "2025-2026" > "2023-2024" > "2" > "10".
  assert_eq!(labels, ["2025-2026", "2023-2024", "2", "10"]);
}

#[tokio::test]
async fn delete_year_blocked_while_students_reference_it() {
  let (s, program, year) = seeded().await;
  let id = s.create_student(student("M1", program, year)).await.unwrap();

  let err = s.delete_year(year).await.unwrap_err();
  assert!(err.is_constraint_violation());
  assert_eq!(s.list_years().await.unwrap().len(), 1);

  s.delete_student(id).await.unwrap();
  s.delete_year(year).await.unwrap();
  assert!(s.list_years().await.unwrap().is_empty());
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn breakdown_includes_programs_without_students() {
  let s    = store().await;
  let year = s.create_year(NewAcademicYear::new("2024-2025")).await.unwrap();
  let a    = s.create_program(NewProgram::new("A", "Alpha")).await.unwrap();
  let b    = s.create_program(NewProgram::new("B", "Beta")).await.unwrap();
  s.create_program(NewProgram::new("C", "Gamma")).await.unwrap();

  s.create_student(student("M1", a, year)).await.unwrap();
  s.create_student(student("M2", a, year)).await.unwrap();
  s.create_student(student("M3", b, year)).await.unwrap();

  assert_eq!(s.count_students().await.unwrap(), 3);
  assert_eq!(s.count_programs().await.unwrap(), 3);

  let counts: Vec<_> = s
    .program_breakdown()
    .await
    .unwrap()
    .into_iter()
    .map(|pc| (pc.nom_filiere, pc.count))
    .collect();
  assert_eq!(
    counts,
    [("Alpha".to_string(), 2), ("Beta".to_string(), 1), ("Gamma".to_string(), 0)]
  );
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn export_rows_in_enrolment_order() {
  let (s, program, year) = seeded().await;
  s.create_student(student("M1", program, year)).await.unwrap();
  s.create_student(student("M2", program, year)).await.unwrap();

  let rows = s.export_rows().await.unwrap();
  let matricules: Vec<_> = rows.iter().map(|r| r.matricule.as_str()).collect();
  assert_eq!(matricules, ["M1", "M2"]);
  assert_eq!(rows[0].nom_filiere, "Informatique");
}
