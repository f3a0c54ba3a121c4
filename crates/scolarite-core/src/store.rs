//! The `SchoolStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `scolarite-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::{future::Future, path::Path};

use crate::{
  StoreError,
  export::ExportRow,
  program::{NewProgram, Program},
  settings::Settings,
  stats::ProgramCount,
  student::{NewStudent, Student},
  year::{AcademicYear, NewAcademicYear},
};

/// Abstraction over a student registry backend.
///
/// Every method maps to a single statement against the backend, so each call
/// is atomic on its own. Deletes of programs and years must fail with an
/// [`ErrorKind::Constraint`](crate::ErrorKind::Constraint) error while any
/// student still references the row.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait SchoolStore: Send + Sync {
  type Error: StoreError;

  /// Path of the database file backing this store, or `None` when the store
  /// has no on-disk representation.
  fn database_file(&self) -> Option<&Path>;

  // ── Settings ──────────────────────────────────────────────────────────

  /// The settings row, or [`Settings::default`] if the row is missing.
  fn get_settings(
    &self,
  ) -> impl Future<Output = Result<Settings, Self::Error>> + Send + '_;

  /// Overwrite the settings row unconditionally.
  fn update_settings(
    &self,
    settings: Settings,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Aggregates ────────────────────────────────────────────────────────

  fn count_students(&self) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn count_programs(&self) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Student count per program. Programs without students are included with
  /// a count of zero.
  fn program_breakdown(
    &self,
  ) -> impl Future<Output = Result<Vec<ProgramCount>, Self::Error>> + Send + '_;

  // ── Students ──────────────────────────────────────────────────────────

  /// All students with a resolvable program and year, newest first.
  fn list_students(
    &self,
  ) -> impl Future<Output = Result<Vec<Student>, Self::Error>> + Send + '_;

  /// Insert a student and return its generated id.
  fn create_student(
    &self,
    input: NewStudent,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Delete a student. Deleting an unknown id is not an error.
  fn delete_student(&self, id: i64) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Programs ──────────────────────────────────────────────────────────

  /// All programs ordered by name.
  fn list_programs(
    &self,
  ) -> impl Future<Output = Result<Vec<Program>, Self::Error>> + Send + '_;

  fn create_program(
    &self,
    input: NewProgram,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn delete_program(&self, id: i64) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Academic years ────────────────────────────────────────────────────

  /// All years ordered by label, descending. The comparison is on the label
  /// text, so `"2"` sorts before `"10"`.
  fn list_years(
    &self,
  ) -> impl Future<Output = Result<Vec<AcademicYear>, Self::Error>> + Send + '_;

  fn create_year(
    &self,
    input: NewAcademicYear,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  fn delete_year(&self, id: i64) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Export ────────────────────────────────────────────────────────────

  /// Every student with a resolvable program, in enrolment order.
  fn export_rows(
    &self,
  ) -> impl Future<Output = Result<Vec<ExportRow>, Self::Error>> + Send + '_;
}
