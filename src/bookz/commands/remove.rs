use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Removes every book whose title matches exactly (case-sensitive).
///
/// When nothing matches, the store is not rewritten and the command
/// still succeeds.
pub fn run<S: CatalogStore>(store: &mut S, title: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = helpers::load_catalog(store, &mut result)?;

    let (removed, kept): (Vec<_>, Vec<_>) = books.into_iter().partition(|b| b.title == title);

    if removed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No book titled \"{}\" in the catalog.",
            title
        )));
        return Ok(result);
    }

    store.save(&kept)?;

    let message = if removed.len() == 1 {
        format!("Removed \"{}\"", title)
    } else {
        format!("Removed {} books titled \"{}\"", removed.len(), title)
    };
    result.add_message(CmdMessage::success(message));
    Ok(result.with_affected_books(removed))
}
