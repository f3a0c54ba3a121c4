//! [`SqliteStore`], the SQLite implementation of [`SchoolStore`].

use std::path::{Path, PathBuf};

use rusqlite::OptionalExtension as _;

use scolarite_core::{
  export::ExportRow,
  program::{NewProgram, Program},
  settings::{SEEDED_INSTITUTION_NAME, Settings},
  stats::ProgramCount,
  store::SchoolStore,
  student::{NewStudent, Student},
  year::{AcademicYear, NewAcademicYear},
};

use crate::{
  Result, rows,
  schema::{SCHEMA, SEED_SETTINGS},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A student registry backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
  path: Option<PathBuf>,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, create missing tables and seed the
  /// settings row.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path  = path.as_ref().to_path_buf();
    let conn  = tokio_rusqlite::Connection::open(&path).await?;
    let store = Self { conn, path: Some(path) };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn  = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, path: None };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        conn.execute(SEED_SETTINGS, rusqlite::params![SEEDED_INSTITUTION_NAME])?;
        Ok(())
      })
      .await?;
    tracing::debug!(path = ?self.path, "schema initialised");
    Ok(())
  }

  /// Run a single-value `COUNT(*)` query.
  async fn count(&self, sql: &'static str) -> Result<i64> {
    let n: i64 = self
      .conn
      .call(move |conn| Ok(conn.query_row(sql, [], |r| r.get(0))?))
      .await?;
    Ok(n)
  }

  /// Run a `DELETE ... WHERE <key> = ?1` statement.
  async fn delete_by_id(&self, sql: &'static str, id: i64) -> Result<()> {
    let affected = self
      .conn
      .call(move |conn| Ok(conn.execute(sql, rusqlite::params![id])?))
      .await?;
    tracing::debug!(id, affected, "delete executed");
    Ok(())
  }
}

// ─── SchoolStore impl ────────────────────────────────────────────────────────

impl SchoolStore for SqliteStore {
  type Error = crate::Error;

  fn database_file(&self) -> Option<&Path> { self.path.as_deref() }

  // ── Settings ──────────────────────────────────────────────────────────────

  async fn get_settings(&self) -> Result<Settings> {
    let row: Option<Settings> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            "SELECT universite_nom, universite_logo FROM parametres WHERE id = 1",
            [],
            rows::settings,
          )
          .optional()?)
      })
      .await?;

    Ok(row.unwrap_or_default())
  }

  async fn update_settings(&self, settings: Settings) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE parametres SET universite_nom = ?1, universite_logo = ?2 WHERE id = 1",
          rusqlite::params![settings.universite_nom, settings.universite_logo],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Aggregates ────────────────────────────────────────────────────────────

  async fn count_students(&self) -> Result<i64> {
    self.count("SELECT COUNT(*) FROM etudiant").await
  }

  async fn count_programs(&self) -> Result<i64> {
    self.count("SELECT COUNT(*) FROM filiere").await
  }

  async fn program_breakdown(&self) -> Result<Vec<ProgramCount>> {
    let counts = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT f.nom_filiere, COUNT(e.id_etudiant) AS count
           FROM filiere f
           LEFT JOIN etudiant e ON f.id_filiere = e.id_filiere
           GROUP BY f.id_filiere
           ORDER BY f.id_filiere",
        )?;
        let rows = stmt
          .query_map([], rows::program_count)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(counts)
  }

  // ── Students ──────────────────────────────────────────────────────────────

  async fn list_students(&self) -> Result<Vec<Student>> {
    let students = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             e.id_etudiant, e.matricule, e.nom, e.prenom, e.date_naissance,
             e.sexe, e.id_filiere, e.id_annee,
             f.nom_filiere,
             a.libelle AS annee
           FROM etudiant e
           JOIN filiere f          ON e.id_filiere = f.id_filiere
           JOIN annee_academique a ON e.id_annee   = a.id_annee
           ORDER BY e.id_etudiant DESC",
        )?;
        let rows = stmt
          .query_map([], rows::student)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(students)
  }

  async fn create_student(&self, input: NewStudent) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO etudiant (
             matricule, nom, prenom, date_naissance, sexe, id_filiere, id_annee
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            input.matricule,
            input.nom,
            input.prenom,
            input.date_naissance,
            input.sexe,
            rows::foreign_id(input.id_filiere),
            rows::foreign_id(input.id_annee),
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn delete_student(&self, id: i64) -> Result<()> {
    self
      .delete_by_id("DELETE FROM etudiant WHERE id_etudiant = ?1", id)
      .await
  }

  // ── Programs ──────────────────────────────────────────────────────────────

  async fn list_programs(&self) -> Result<Vec<Program>> {
    let programs = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id_filiere, code_filiere, nom_filiere FROM filiere ORDER BY nom_filiere",
        )?;
        let rows = stmt
          .query_map([], rows::program)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(programs)
  }

  async fn create_program(&self, input: NewProgram) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO filiere (code_filiere, nom_filiere) VALUES (?1, ?2)",
          rusqlite::params![input.code_filiere, input.nom_filiere],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn delete_program(&self, id: i64) -> Result<()> {
    self
      .delete_by_id("DELETE FROM filiere WHERE id_filiere = ?1", id)
      .await
  }

  // ── Academic years ────────────────────────────────────────────────────────

  async fn list_years(&self) -> Result<Vec<AcademicYear>> {
    let years = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id_annee, libelle FROM annee_academique ORDER BY libelle DESC",
        )?;
        let rows = stmt
          .query_map([], rows::year)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(years)
  }

  async fn create_year(&self, input: NewAcademicYear) -> Result<i64> {
    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO annee_academique (libelle) VALUES (?1)",
          rusqlite::params![input.libelle],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn delete_year(&self, id: i64) -> Result<()> {
    self
      .delete_by_id("DELETE FROM annee_academique WHERE id_annee = ?1", id)
      .await
  }

  // ── Export ────────────────────────────────────────────────────────────────

  async fn export_rows(&self) -> Result<Vec<ExportRow>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT e.matricule, e.nom, e.prenom, f.nom_filiere
           FROM etudiant e
           JOIN filiere f ON e.id_filiere = f.id_filiere
           ORDER BY e.id_etudiant",
        )?;
        let rows = stmt
          .query_map([], rows::export_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
