//! # API Facade
//!
//! Single entry point for every catalog operation. UI clients hold a
//! [`BookzApi`] and never talk to the store or the command modules
//! directly, which keeps alternative frontends possible without
//! touching the core.

use crate::commands;
use crate::error::Result;
use crate::store::CatalogStore;

/// The main API facade for bookz operations.
///
/// Generic over [`CatalogStore`] so the same surface runs against the
/// file-backed store in production and the in-memory store in tests.
pub struct BookzApi<S: CatalogStore> {
    store: S,
    paths: BookzPaths,
}

impl<S: CatalogStore> BookzApi<S> {
    pub fn new(store: S, paths: BookzPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_book(
        &mut self,
        title: String,
        author: String,
        year: i32,
        genre: String,
        read: bool,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, author, year, genre, read)
    }

    /// Removes every book with exactly this title.
    pub fn remove_book(&mut self, title: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, title)
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &BookzPaths {
        &self.paths
    }
}

// Re-export command types so API consumers only import from here.
pub use crate::commands::config::ConfigAction;
pub use crate::commands::stats::LibraryStats;
pub use crate::commands::{BookzPaths, CmdMessage, CmdResult, MessageLevel};
