use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

/// Loads the catalog, turning a recovered (unparseable) file into a
/// warning on the result instead of an error.
pub fn load_catalog<S: CatalogStore>(store: &S, result: &mut CmdResult) -> Result<Vec<Book>> {
    let loaded = store.load()?;
    if loaded.recovered {
        result.add_message(CmdMessage::warning(
            "Existing catalog could not be parsed; starting from an empty catalog.",
        ));
    }
    Ok(loaded.books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::store::LoadedCatalog;

    struct RecoveredStore;

    impl CatalogStore for RecoveredStore {
        fn load(&self) -> Result<LoadedCatalog> {
            Ok(LoadedCatalog {
                books: Vec::new(),
                recovered: true,
            })
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn clean_load_adds_no_messages() {
        let store = InMemoryStore::new();
        let mut result = CmdResult::default();

        let books = load_catalog(&store, &mut result).unwrap();

        assert!(books.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn recovered_load_adds_a_warning() {
        let mut result = CmdResult::default();

        let books = load_catalog(&RecoveredStore, &mut result).unwrap();

        assert!(books.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}
