use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::CatalogStore;

/// Adds a book to the end of the catalog and persists the result.
///
/// Validation runs before any store access, so a rejected add leaves the
/// catalog exactly as it was. Duplicates are allowed.
pub fn run<S: CatalogStore>(
    store: &mut S,
    title: String,
    author: String,
    year: i32,
    genre: String,
    read: bool,
) -> Result<CmdResult> {
    let book = Book::new(title, author, year, genre, read)?;

    let mut result = CmdResult::default();
    let mut books = helpers::load_catalog(store, &mut result)?;
    books.push(book.clone());
    store.save(&books)?;

    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" by {}",
        book.title, book.author
    )));
    result.affected_books.push(book);
    Ok(result)
}
