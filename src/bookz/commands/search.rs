use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

/// Case-insensitive substring search over title and author.
///
/// Matches keep their catalog order; there is no ranking. An empty query
/// matches every book, since every string contains the empty substring.
pub fn run<S: CatalogStore>(store: &S, query: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = helpers::load_catalog(store, &mut result)?;
    let query_lower = query.to_lowercase();

    let matches: Vec<Book> = books
        .into_iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&query_lower)
                || b.author.to_lowercase().contains(&query_lower)
        })
        .collect();

    Ok(result.with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn sample_store() -> InMemoryStore {
        StoreFixture::new()
            .with_read_book("Dune", "Frank Herbert")
            .with_book("1984", "George Orwell")
            .with_book("Dune Messiah", "Frank Herbert")
            .store
    }

    #[test]
    fn matches_title_case_insensitively() {
        let store = sample_store();
        let found = run(&store, "dUNe").unwrap().listed_books;

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Dune");
        assert_eq!(found[1].title, "Dune Messiah");
    }

    #[test]
    fn matches_author_substrings() {
        let store = sample_store();
        let found = run(&store, "orwell").unwrap().listed_books;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "1984");
    }

    #[test]
    fn no_match_returns_empty() {
        let store = sample_store();
        assert!(run(&store, "austen").unwrap().listed_books.is_empty());
    }

    #[test]
    fn preserves_catalog_order() {
        let store = sample_store();
        let found = run(&store, "herbert").unwrap().listed_books;

        assert_eq!(found[0].title, "Dune");
        assert_eq!(found[1].title, "Dune Messiah");
    }

    #[test]
    fn empty_query_matches_everything() {
        let store = sample_store();
        assert_eq!(run(&store, "").unwrap().listed_books.len(), 3);
    }

    #[test]
    fn does_not_modify_the_catalog() {
        let store = sample_store();
        run(&store, "dune").unwrap();

        assert_eq!(store.load().unwrap().books.len(), 3);
    }
}
