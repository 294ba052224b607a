//! # newsie
//!
//! Read Arch Linux news from the terminal and keep track of what has been
//! read.
//!
//! ```text
//! Fetcher → Normalizer → Session ← ReadCache
//!                           ↓
//!                        Renderer
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # How many unread posts? (exit status = count)
//! newsie fetch
//!
//! # List everything, unread posts highlighted
//! newsie ls --all
//!
//! # Read post 2
//! newsie read -n 2
//!
//! # Page through unread posts
//! newsie browse
//! ```

/// Application context, session and error types.
///
/// [`AppContext`](app::AppContext) wires config, fetcher and normalizer and
/// opens a [`Session`](app::Session) per invocation.
pub mod app;

/// Command-line interface using clap.
///
/// - `browse [--all]` - page through unread (or all) posts
/// - `clear` - mark everything read
/// - `fetch [--prompt]` - report unread count as exit status
/// - `ls [--all]` - list unread (or all) posts
/// - `read [--number N]` - show one post
pub mod cli;

/// Configuration loaded from `~/.config/newsie/config.toml`.
pub mod config;

/// Prompting and screen clearing for interactive commands.
pub mod console;

/// Core domain model: [`FeedItem`](domain::FeedItem).
pub mod domain;

/// HTTP retrieval of the news feed.
pub mod fetcher;

/// RSS/Atom parsing via feed-rs.
pub mod normalizer;

/// HTML description to styled terminal text.
pub mod render;

/// Read-state persistence.
///
/// - [`Store`](store::Store): read/unread bookkeeping
/// - [`ReadCache`](store::ReadCache): append-only hash file
pub mod store;

pub mod style;
