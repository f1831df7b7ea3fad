//! # Bookz Architecture
//!
//! Bookz is a **UI-agnostic catalog core** with a thin CLI on top. The
//! crate is structured so the command line is just one possible client:
//!
//! ```text
//! +---------------------------+
//! |        CLI (main.rs)      |  parses args, renders output
//! +---------------------------+
//!              |
//! +---------------------------+
//! |      API (api.rs)         |  facade over every operation
//! +---------------------------+
//!              |
//! +---------------------------+
//! |   Commands (commands/)    |  one module per operation,
//! |                           |  returns structured CmdResult
//! +---------------------------+
//!              |
//! +---------------------------+
//! |     Storage (store/)      |  CatalogStore trait:
//! |                           |  FileStore / InMemoryStore
//! +---------------------------+
//! ```
//!
//! Core rules:
//!
//! - The core never prints. Commands return [`commands::CmdResult`] and
//!   the frontend decides how to render it.
//! - Mutations are load-modify-save over the whole catalog. A failed
//!   save leaves the previous file contents in place.
//! - Storage is swappable through the [`store::CatalogStore`] trait, so
//!   every command is testable against the in-memory store.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
