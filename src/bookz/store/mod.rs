//! # Storage Layer
//!
//! Storage abstraction for the catalog. The [`CatalogStore`] trait lets the
//! command layer work against different backends:
//!
//! - [`fs::FileStore`]: production storage, the whole catalog as one JSON
//!   array in a single file, replaced atomically on every save.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! The catalog always travels as a unit. `load` returns every book and
//! `save` rewrites the complete file; there is no per-record I/O. The
//! dataset is a personal collection, small enough that whole-file round
//! trips stay trivially fast.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Outcome of loading the catalog.
///
/// `recovered` is set when existing content could not be parsed and the
/// store fell back to an empty catalog. Callers surface this as a warning
/// rather than an error.
#[derive(Debug, Default)]
pub struct LoadedCatalog {
    pub books: Vec<Book>,
    pub recovered: bool,
}

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// Loads the full catalog. A missing backing file is a normal first
    /// run and yields an empty catalog.
    fn load(&self) -> Result<LoadedCatalog>;

    /// Persists the full catalog, replacing whatever was stored before.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
