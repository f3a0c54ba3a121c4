//! Error taxonomy shared by every store backend.

/// Coarse classification of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// An unexpected storage fault (I/O, SQL, closed connection).
  Persistence,
  /// A referential-integrity violation rejected by the database.
  Constraint,
}

/// Implemented by the error type of every [`SchoolStore`](crate::store::SchoolStore)
/// backend so that higher layers can tell a constraint violation apart from a
/// storage fault without knowing the backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;

  fn is_constraint_violation(&self) -> bool {
    self.kind() == ErrorKind::Constraint
  }
}
