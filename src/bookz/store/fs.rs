use std::fs;
use std::path::PathBuf;

use super::{CatalogStore, LoadedCatalog};
use crate::error::{BookzError, Result};
use crate::model::Book;

/// File-backed catalog storage.
///
/// The entire catalog lives in one pretty-printed JSON file. Saves go
/// through a temporary sibling file followed by a rename, so a reader
/// never observes a half-written catalog.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookzError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("catalog");
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<LoadedCatalog> {
        if !self.path.exists() {
            // First run
            return Ok(LoadedCatalog::default());
        }

        let content = fs::read_to_string(&self.path).map_err(BookzError::Io)?;
        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => Ok(LoadedCatalog {
                books,
                recovered: false,
            }),
            Err(_) => Ok(LoadedCatalog {
                books: Vec::new(),
                recovered: true,
            }),
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(books).map_err(BookzError::Serialization)?;

        // Write-then-rename keeps the replace atomic on the same filesystem.
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(BookzError::Io)?;
        fs::rename(&tmp, &self.path).map_err(BookzError::Io)?;
        Ok(())
    }
}
