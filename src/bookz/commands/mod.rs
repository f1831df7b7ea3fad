use std::path::PathBuf;

use crate::config::BookzConfig;
use crate::model::Book;

pub mod add;
pub mod config;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;

/// Filesystem locations the commands need besides the store itself.
#[derive(Debug, Clone)]
pub struct BookzPaths {
    /// Directory holding config.json (and the default catalog file).
    pub data_dir: PathBuf,
    /// Resolved location of the catalog file.
    pub library_file: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// Commands never print. They report what happened here and leave the
/// rendering to the caller.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books a mutation touched (added or removed).
    pub affected_books: Vec<Book>,
    /// Books to display, in catalog order.
    pub listed_books: Vec<Book>,
    pub stats: Option<stats::LibraryStats>,
    pub config: Option<BookzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: stats::LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: BookzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
