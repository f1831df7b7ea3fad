use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookz", version)]
#[command(about = "Personal library catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to operate on (overrides the configured location)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Book title
        title: String,

        /// Author name
        author: String,

        /// Publication year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,

        /// Genre label
        #[arg(short, long)]
        genre: String,

        /// Mark the book as already read
        #[arg(short, long)]
        read: bool,
    },

    /// Remove every book with the given title (exact match)
    #[command(alias = "rm")]
    Remove {
        /// Title to remove
        title: String,
    },

    /// Search books by title or author
    #[command(alias = "s")]
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Show catalog statistics
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g. library-file)
        key: Option<String>,

        /// Value to set (omit to print the current value)
        value: Option<String>,
    },
}
