use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

/// Aggregate numbers over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LibraryStats {
    pub total: usize,
    pub read_count: usize,
    /// Percentage of read books, 0.0 for an empty catalog.
    pub read_percentage: f64,
}

impl LibraryStats {
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let read_count = books.iter().filter(|b| b.read).count();
        let read_percentage = if total == 0 {
            0.0
        } else {
            100.0 * read_count as f64 / total as f64
        };

        Self {
            total,
            read_count,
            read_percentage,
        }
    }
}

pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = helpers::load_catalog(store, &mut result)?;
    Ok(result.with_stats(LibraryStats::from_books(&books)))
}
