use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Returns every book in insertion order.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = helpers::load_catalog(store, &mut result)?;
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_catalog_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();

        assert!(result.listed_books.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let store = StoreFixture::new().with_books(3).store;
        let listed = run(&store).unwrap().listed_books;

        let titles: Vec<_> = listed.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Book 1", "Book 2", "Book 3"]);
    }
}
