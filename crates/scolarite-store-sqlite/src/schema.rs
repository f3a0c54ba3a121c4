//! SQL schema for the Scolarité SQLite store.
//!
//! Executed every time a connection is opened. Column names are part of the
//! JSON contract of the HTTP API and must not be renamed.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- Singleton row, id = 1.
CREATE TABLE IF NOT EXISTS parametres (
    id              INTEGER PRIMARY KEY,
    universite_nom  TEXT,
    universite_logo TEXT
);

CREATE TABLE IF NOT EXISTS filiere (
    id_filiere   INTEGER PRIMARY KEY AUTOINCREMENT,
    code_filiere TEXT,
    nom_filiere  TEXT
);

CREATE TABLE IF NOT EXISTS annee_academique (
    id_annee INTEGER PRIMARY KEY AUTOINCREMENT,
    libelle  TEXT
);

CREATE TABLE IF NOT EXISTS etudiant (
    id_etudiant    INTEGER PRIMARY KEY AUTOINCREMENT,
    matricule      TEXT,
    nom            TEXT,
    prenom         TEXT,
    date_naissance TEXT,
    sexe           TEXT,
    id_filiere     INTEGER,
    id_annee       INTEGER,
    FOREIGN KEY(id_filiere) REFERENCES filiere(id_filiere),
    FOREIGN KEY(id_annee)   REFERENCES annee_academique(id_annee)
);
";

/// Creates the settings row if it does not exist yet. Bound to
/// [`SEEDED_INSTITUTION_NAME`](scolarite_core::settings::SEEDED_INSTITUTION_NAME).
pub const SEED_SETTINGS: &str =
  "INSERT OR IGNORE INTO parametres (id, universite_nom, universite_logo) VALUES (1, ?1, '')";
