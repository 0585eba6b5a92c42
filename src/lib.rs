//! # bulletin - a terminal dashboard for a remote content feed
//!
//! Bulletin is a two-pane terminal client for a small bulletin-board HTTP
//! API: a sidebar lists the feed, the reading pane shows the selected
//! post wrapped to the viewport, and modal overlays handle logging in and
//! composing new posts.
//!
//! The process is single threaded and blocking: there is exactly one
//! "wait for a key" call site, and every network call runs to completion
//! before the next key is read.
//!
//! ## Modules
//!
//! - [`api`]: the HTTP collaborator (`FeedService` trait + blocking client)
//! - [`auth`]: flat-file access token store
//! - [`cli`]: command-line flags
//! - [`config`]: YAML configuration loading
//! - [`error`]: error types and result alias
//! - [`model`]: feed data model
//! - [`tui`]: the terminal interface (navigation, overlays, rendering)

/// HTTP collaborator for the feed server.
pub mod api;

/// Persisted access token store.
pub mod auth;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `BulletinError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Feed data model.
pub mod model;

/// Terminal user interface.
///
/// Interactive TUI built with ratatui.
pub mod tui;
