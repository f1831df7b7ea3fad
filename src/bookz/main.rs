use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

use bookz::api::{BookzApi, BookzPaths, CmdMessage, ConfigAction, LibraryStats, MessageLevel};
use bookz::config::BookzConfig;
use bookz::error::{BookzError, Result};
use bookz::model::Book;
use bookz::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

const READ_MARKER: &str = "✔";
const UNREAD_MARKER: &str = "✘";

const MAX_TITLE_WIDTH: usize = 40;
const MAX_AUTHOR_WIDTH: usize = 28;
const MAX_GENRE_WIDTH: usize = 20;
// Ten digits covers any non-negative i32 year.
const MAX_YEAR_WIDTH: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

struct AppContext {
    api: BookzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => handle_add(&mut ctx, title, author, year, genre, read),
        Some(Commands::Remove { title }) => handle_remove(&mut ctx, title),
        Some(Commands::Search { query }) => handle_search(&ctx, query),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    // BOOKZ_HOME overrides the OS data directory, mainly for tests.
    if let Ok(home) = std::env::var("BOOKZ_HOME") {
        return Ok(PathBuf::from(home));
    }

    let proj_dirs = ProjectDirs::from("com", "bookz", "bookz")
        .ok_or_else(|| BookzError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = BookzConfig::load(&data_dir).unwrap_or_default();

    // --file beats the config, the config beats the default location.
    let library_file = cli
        .file
        .clone()
        .or_else(|| config.library_file.clone())
        .unwrap_or_else(|| data_dir.join("library.json"));

    let store = FileStore::new(library_file.clone());
    let paths = BookzPaths {
        data_dir,
        library_file,
    };

    Ok(AppContext {
        api: BookzApi::new(store, paths),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: i32,
    genre: String,
    read: bool,
) -> Result<()> {
    let result = ctx.api.add_book(title, author, year, genre, read)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_book(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    if query.trim().is_empty() {
        println!("{}", "Search query is empty; nothing to search for.".yellow());
        return Ok(());
    }

    let result = ctx.api.search_books(&query)?;
    if result.listed_books.is_empty() {
        println!("No matching books found.");
    } else {
        print_books(&result.listed_books);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_paths = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!(
            "library-file = {}",
            config.get("library-file").unwrap_or_default()
        );
    }
    if show_paths {
        println!(
            "{}",
            format!("catalog: {}", ctx.api.paths().library_file.display()).dimmed()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books in the catalog.");
        return;
    }

    let idx_width = format!("{}.", books.len()).len();
    let title_width = column_width(
        books.iter().map(|b| b.title.as_str()),
        "Title",
        MAX_TITLE_WIDTH,
    );
    let author_width = column_width(
        books.iter().map(|b| b.author.as_str()),
        "Author",
        MAX_AUTHOR_WIDTH,
    );
    let genre_width = column_width(
        books.iter().map(|b| b.genre.as_str()),
        "Genre",
        MAX_GENRE_WIDTH,
    );
    let years: Vec<String> = books.iter().map(|b| b.year.to_string()).collect();
    let year_width = column_width(years.iter().map(String::as_str), "Year", MAX_YEAR_WIDTH);

    println!(
        "{}  {}  {}  {}  {}",
        " ".repeat(idx_width),
        pad_to_width("Title", title_width).dimmed(),
        pad_to_width("Author", author_width).dimmed(),
        pad_to_width("Year", year_width).dimmed(),
        "Genre".dimmed(),
    );

    for (i, book) in books.iter().enumerate() {
        let marker = if book.read {
            READ_MARKER.green()
        } else {
            UNREAD_MARKER.dimmed()
        };
        println!(
            "{:>width$}  {}  {}  {}  {}  {}",
            format!("{}.", i + 1),
            pad_to_width(&truncate_to_width(&book.title, title_width), title_width),
            pad_to_width(&truncate_to_width(&book.author, author_width), author_width),
            pad_to_width(&years[i], year_width),
            pad_to_width(&truncate_to_width(&book.genre, genre_width), genre_width),
            marker,
            width = idx_width,
        );
    }
}

fn print_stats(stats: &LibraryStats) {
    if stats.total == 0 {
        println!("No books in the catalog.");
        return;
    }

    println!("Total books: {}", stats.total);
    println!(
        "Books read:  {} ({:.1}%)",
        stats.read_count, stats.read_percentage
    );
}

fn column_width<'a, I>(values: I, header: &str, max: usize) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values
        .map(|v| v.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
        .min(max)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current += w;
    }
    result
}
