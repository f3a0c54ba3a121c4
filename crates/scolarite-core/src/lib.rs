//! Core types and trait definitions for the Scolarité student registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod error;
pub mod export;
mod nullable;
pub mod program;
pub mod settings;
pub mod stats;
pub mod store;
pub mod student;
pub mod year;

pub use error::{ErrorKind, StoreError};
