use super::{CatalogStore, LoadedCatalog};
use crate::error::Result;
use crate::model::Book;

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<LoadedCatalog> {
        Ok(LoadedCatalog {
            books: self.books.clone(),
            recovered: false,
        })
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.books = books.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for a pre-populated in-memory store.
    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds `count` generic unread books ("Book 1" by "Author 1", ...).
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 1..=count {
                self = self.with_book(&format!("Book {}", i), &format!("Author {}", i));
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            let book = Book::new(
                title.to_string(),
                author.to_string(),
                2000,
                "Fiction".to_string(),
                false,
            )
            .unwrap();
            self.push(book);
            self
        }

        pub fn with_read_book(mut self, title: &str, author: &str) -> Self {
            let book = Book::new(
                title.to_string(),
                author.to_string(),
                2000,
                "Fiction".to_string(),
                true,
            )
            .unwrap();
            self.push(book);
            self
        }

        fn push(&mut self, book: Book) {
            let mut books = self.store.load().unwrap().books;
            books.push(book);
            self.store.save(&books).unwrap();
        }
    }
}
